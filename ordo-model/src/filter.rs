use crate::{EntityKind, Kinded};
use ordo_order::{Ordered, Patch};
use ordo_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A saved filter. `query` is opaque to the client core; the remote store
/// evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(rename = "generalOrder")]
    pub order: i64,
    pub modified_at: Timestamp,
}

impl Filter {
    pub fn new(id: EntityId, name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            query: query.into(),
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

impl Ordered for Filter {
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

impl Kinded for Filter {
    const KIND: EntityKind = EntityKind::Filter;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl Patch<Filter> for FilterPatch {
    fn apply_to(self, filter: &mut Filter) {
        if let Some(name) = self.name {
            filter.name = name;
        }
        if let Some(query) = self.query {
            filter.query = query;
        }
        if let Some(color) = self.color {
            filter.color = color;
        }
        if let Some(favorite) = self.favorite {
            filter.favorite = favorite;
        }
        if let Some(modified_at) = self.modified_at {
            filter.modified_at = modified_at;
        }
    }
}
