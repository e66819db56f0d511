use crate::{EntityKind, Kinded};
use ordo_order::{Ordered, Patch};
use ordo_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A user-defined label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(rename = "generalOrder")]
    pub order: i64,
    pub modified_at: Timestamp,
}

impl Label {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: String::new(),
            favorite: false,
            order: 0,
            modified_at: Timestamp::now(),
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

impl Ordered for Label {
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
}

impl Kinded for Label {
    const KIND: EntityKind = EntityKind::Label;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl Patch<Label> for LabelPatch {
    fn apply_to(self, label: &mut Label) {
        if let Some(name) = self.name {
            label.name = name;
        }
        if let Some(color) = self.color {
            label.color = color;
        }
        if let Some(favorite) = self.favorite {
            label.favorite = favorite;
        }
        if let Some(modified_at) = self.modified_at {
            label.modified_at = modified_at;
        }
    }
}
