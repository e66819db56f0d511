use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of ordered collection a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Project,
    Task,
    Label,
    Filter,
    SharedProject,
}

impl EntityKind {
    /// All kinds, in the order a session bootstraps them.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Project,
        EntityKind::Task,
        EntityKind::Label,
        EntityKind::Filter,
        EntityKind::SharedProject,
    ];

    /// Stable name used in logs and request routing.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::Task => "task",
            EntityKind::Label => "label",
            EntityKind::Filter => "filter",
            EntityKind::SharedProject => "shared_project",
        }
    }

    /// Whether entities of this kind can nest under a parent.
    #[must_use]
    pub const fn is_hierarchical(&self) -> bool {
        matches!(
            self,
            EntityKind::Project | EntityKind::Task | EntityKind::SharedProject
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ties an entity type to its [`EntityKind`].
pub trait Kinded {
    const KIND: EntityKind;
}
