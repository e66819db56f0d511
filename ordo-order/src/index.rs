//! Id → position lookup over a sorted collection.

use crate::Ordered;
use ordo_types::EntityId;
use std::collections::HashMap;

/// Maps entity ids to their position in the store's backing vector.
///
/// Positions are only valid until the next reorder; the store rebuilds the
/// index after every sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityIndex {
    positions: HashMap<EntityId, usize>,
}

impl EntityIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over `entities`. Later duplicates shadow earlier ones.
    pub fn build<E: Ordered>(entities: &[E]) -> Self {
        let mut index = Self::new();
        index.rebuild(entities);
        index
    }

    /// Discards all positions and re-reads them from `entities`.
    pub fn rebuild<E: Ordered>(&mut self, entities: &[E]) {
        self.positions.clear();
        self.positions.reserve(entities.len());
        for (pos, e) in entities.iter().enumerate() {
            self.positions.insert(e.id(), pos);
        }
    }

    /// Records a single position (used while appending before a resort).
    pub fn insert(&mut self, id: EntityId, pos: usize) {
        self.positions.insert(id, pos);
    }

    /// Position of `id`, if indexed.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Whether `id` is indexed.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of indexed ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
