//! Collaboration projects.
//!
//! A shared project lives in its own collection, separate from the user's
//! private project tree, because its order keys are owned by the sharing
//! side's remote collection.

use crate::{EntityKind, Kinded};
use ordo_order::{Hierarchical, Ordered, Patch};
use ordo_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedProject {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub favorite: bool,
    /// User who owns the project.
    pub owner_id: EntityId,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    #[serde(rename = "generalOrder")]
    pub order: i64,
    pub modified_at: Timestamp,
    #[serde(skip)]
    pub collapsed: bool,
}

impl SharedProject {
    pub fn new(id: EntityId, owner_id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: String::new(),
            favorite: false,
            owner_id,
            parent_id: None,
            order: 0,
            modified_at: Timestamp::now(),
            collapsed: false,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

impl Ordered for SharedProject {
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

impl Hierarchical for SharedProject {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

impl Kinded for SharedProject {
    const KIND: EntityKind = EntityKind::SharedProject;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl Patch<SharedProject> for SharedProjectPatch {
    fn apply_to(self, project: &mut SharedProject) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(color) = self.color {
            project.color = color;
        }
        if let Some(favorite) = self.favorite {
            project.favorite = favorite;
        }
        if let Some(modified_at) = self.modified_at {
            project.modified_at = modified_at;
        }
    }
}
