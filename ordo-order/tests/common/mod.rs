//! Shared test entities for the ordering tests.

#![allow(dead_code)]

use ordo_order::{Hierarchical, Ordered, OrderedStore, Patch};
use ordo_types::{EntityId, Timestamp};

/// A flat entity shaped like a label: name, favorite flag, order.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub order: i64,
    pub name: String,
    pub favorite: bool,
    pub modified_at: Timestamp,
}

impl Ordered for Item {
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

/// Partial update for [`Item`].
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub favorite: Option<bool>,
    pub modified_at: Option<Timestamp>,
}

impl Patch<Item> for ItemPatch {
    fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(favorite) = self.favorite {
            item.favorite = favorite;
        }
        if let Some(ts) = self.modified_at {
            item.modified_at = ts;
        }
    }
}

pub fn ts(millis: i64) -> Timestamp {
    Timestamp::from_millis(millis).unwrap()
}

pub fn item(id: i64, order: i64) -> Item {
    Item {
        id: EntityId::new(id),
        order,
        name: format!("item-{id}"),
        favorite: false,
        modified_at: ts(1_000),
    }
}

pub fn id(raw: i64) -> EntityId {
    EntityId::new(raw)
}

/// Builds a store from `(id, order)` pairs.
pub fn store(pairs: &[(i64, i64)]) -> OrderedStore<Item> {
    pairs.iter().map(|&(i, o)| item(i, o)).collect()
}

/// `(id, order)` pairs in store order.
pub fn layout<E: Ordered>(store: &OrderedStore<E>) -> Vec<(i64, i64)> {
    store.iter().map(|e| (e.id().get(), e.order())).collect()
}

/// Whether any two entities share an order key.
pub fn has_duplicate_orders<E: Ordered>(store: &OrderedStore<E>) -> bool {
    store
        .as_slice()
        .windows(2)
        .any(|w| w[0].order() == w[1].order())
}

/// A tree node shaped like a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: EntityId,
    pub order: i64,
    pub parent_id: Option<EntityId>,
    pub collapsed: bool,
    pub modified_at: Timestamp,
}

impl Ordered for Node {
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

impl Hierarchical for Node {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

pub fn node(id: i64, order: i64, parent: Option<i64>) -> Node {
    Node {
        id: EntityId::new(id),
        order,
        parent_id: parent.map(EntityId::new),
        collapsed: false,
        modified_at: ts(1_000),
    }
}
