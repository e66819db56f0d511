//! Per-login session state.
//!
//! A [`Session`] owns one [`Collection`] per entity kind. It is created when
//! the user logs in and torn down with [`Session::end`] at logout; there is
//! no process-wide state.

use crate::collection::Collection;
use ordo_model::{EntityKind, Filter, Kinded, Label, Project, SharedProject, Task};
use ordo_order::Ordered;
use tracing::info;

/// Entity kinds a [`Session`] holds a collection for.
pub trait SessionKind: Ordered + Kinded + Sized {
    fn collection(session: &Session) -> &Collection<Self>;
}

macro_rules! session_kind {
    ($ty:ty, $field:ident) => {
        impl SessionKind for $ty {
            fn collection(session: &Session) -> &Collection<Self> {
                &session.$field
            }
        }
    };
}

session_kind!(Project, projects);
session_kind!(Task, tasks);
session_kind!(Label, labels);
session_kind!(Filter, filters);
session_kind!(SharedProject, shared_projects);

/// The collections of one logged-in user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    projects: Collection<Project>,
    tasks: Collection<Task>,
    labels: Collection<Label>,
    filters: Collection<Filter>,
    shared_projects: Collection<SharedProject>,
}

impl Session {
    /// Starts an empty session.
    pub fn start() -> Self {
        info!("session started");
        Self::default()
    }

    /// The collection for kind `E`.
    pub fn collection<E: SessionKind>(&self) -> &Collection<E> {
        E::collection(self)
    }

    pub fn projects(&self) -> &Collection<Project> {
        &self.projects
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    pub fn labels(&self) -> &Collection<Label> {
        &self.labels
    }

    pub fn filters(&self) -> &Collection<Filter> {
        &self.filters
    }

    pub fn shared_projects(&self) -> &Collection<SharedProject> {
        &self.shared_projects
    }

    /// Number of entities held for `kind`.
    pub async fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Project => self.projects.len().await,
            EntityKind::Task => self.tasks.len().await,
            EntityKind::Label => self.labels.len().await,
            EntityKind::Filter => self.filters.len().await,
            EntityKind::SharedProject => self.shared_projects.len().await,
        }
    }

    /// Requests still outstanding across every kind.
    pub async fn outstanding(&self) -> usize {
        self.projects.outstanding().await
            + self.tasks.outstanding().await
            + self.labels.outstanding().await
            + self.filters.outstanding().await
            + self.shared_projects.outstanding().await
    }

    /// Logs out: empties every collection.
    ///
    /// Handles cloned out of the session (engines, pollers) see the cleared
    /// state; stop pollers before ending the session.
    pub async fn end(self) {
        self.projects.clear().await;
        self.tasks.clear().await;
        self.labels.clear().await;
        self.filters.clear().await;
        self.shared_projects.clear().await;
        info!("session ended");
    }
}
