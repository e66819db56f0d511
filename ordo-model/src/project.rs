use crate::{EntityKind, Kinded};
use ordo_order::{Hierarchical, Ordered, Patch};
use ordo_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A project in the user's project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(rename = "generalOrder")]
    pub order: i64,
    pub modified_at: Timestamp,
    /// Client-only: children hidden in the sidebar tree.
    #[serde(skip)]
    pub collapsed: bool,
}

impl Project {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: String::new(),
            favorite: false,
            archived: false,
            parent_id: None,
            order: 0,
            modified_at: Timestamp::now(),
            collapsed: false,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_modified_at(mut self, modified_at: Timestamp) -> Self {
        self.modified_at = modified_at;
        self
    }
}

impl Ordered for Project {
    fn id(&self) -> EntityId {
        self.id
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }

    fn modified_at(&self) -> Timestamp {
        self.modified_at
    }

    fn parent_id(&self) -> Option<EntityId> {
        self.parent_id
    }

    fn absorb(&mut self, remote: &Self) {
        let collapsed = self.collapsed;
        *self = remote.clone();
        self.collapsed = collapsed;
    }
}

impl Hierarchical for Project {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

impl Kinded for Project {
    const KIND: EntityKind = EntityKind::Project;
}

/// Partial update of a [`Project`]. `None` leaves a field untouched.
///
/// Serializes as the body of an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    /// `Some(None)` detaches the project to the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl ProjectPatch {
    /// Every mutable field of an authoritative response.
    pub fn from_response(project: &Project) -> Self {
        Self {
            name: Some(project.name.clone()),
            color: Some(project.color.clone()),
            favorite: Some(project.favorite),
            archived: Some(project.archived),
            parent_id: Some(project.parent_id),
            modified_at: Some(project.modified_at),
        }
    }
}

impl Patch<Project> for ProjectPatch {
    fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(color) = self.color {
            project.color = color;
        }
        if let Some(favorite) = self.favorite {
            project.favorite = favorite;
        }
        if let Some(archived) = self.archived {
            project.archived = archived;
        }
        if let Some(parent_id) = self.parent_id {
            project.parent_id = parent_id;
        }
        if let Some(modified_at) = self.modified_at {
            project.modified_at = modified_at;
        }
    }
}
