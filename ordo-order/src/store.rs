//! The ordered collection.

use crate::allocator;
use crate::{EntityIndex, Ordered, Patch};
use ordo_types::EntityId;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// An in-memory collection kept sorted by order key.
///
/// Ties between equal keys (only reachable through remote data) are broken
/// by ascending id, so iteration order is always total and deterministic.
///
/// All mutations are synchronous and never fail: operations naming an
/// unknown id, or needing an order key past `i64::MAX`, return
/// `false`/`None` and leave the collection untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedStore<E> {
    pub(crate) entities: Vec<E>,
    pub(crate) index: EntityIndex,
}

impl<E> Default for OrderedStore<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            index: EntityIndex::new(),
        }
    }
}

impl<E: Ordered> OrderedStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `entities`, as [`load`](Self::load) would.
    pub fn from_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let mut store = Self::new();
        store.load(entities);
        store
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.index.get(id).map(|pos| &self.entities[pos])
    }

    /// Whether `id` is in the collection.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains(id)
    }

    /// Logical position of `id` (0-based, in order).
    #[must_use]
    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.index.get(id)
    }

    /// Entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entities.iter()
    }

    /// Entities in order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.entities
    }

    /// Ids in order.
    #[must_use]
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(Ordered::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ── Bulk ─────────────────────────────────────────────────────

    /// Replaces the whole collection, then sorts it.
    ///
    /// If the input repeats an id, the last occurrence wins.
    pub fn load(&mut self, entities: impl IntoIterator<Item = E>) {
        self.entities.clear();
        self.index.clear();
        for e in entities {
            let id = e.id();
            match self.index.get(id) {
                Some(pos) => {
                    warn!("load: duplicate id {id}, keeping the later copy");
                    self.entities[pos] = e;
                }
                None => {
                    self.index.insert(id, self.entities.len());
                    self.entities.push(e);
                }
            }
        }
        self.resort();
        debug!("load: {} entities", self.entities.len());
    }

    /// Empties the collection (session teardown).
    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }

    // ── Inserts ──────────────────────────────────────────────────

    /// Adds `entity` with whatever order it already carries.
    ///
    /// Nothing is renumbered. An entity whose id is already present replaces
    /// the existing copy. Returns `true` if the id was new.
    pub fn add(&mut self, entity: E) -> bool {
        let id = entity.id();
        let is_new = match self.index.get(id) {
            Some(pos) => {
                self.entities[pos] = entity;
                false
            }
            None => {
                self.entities.push(entity);
                true
            }
        };
        self.resort();
        is_new
    }

    /// Inserts `entity` directly before `before_id`.
    pub fn add_before(&mut self, entity: E, before_id: EntityId) -> bool {
        let Some(k) = self.reference_order(entity.id(), before_id, "add_before") else {
            return false;
        };
        self.place(entity, "add_before", |v| allocator::insert_before(v, k))
    }

    /// Inserts `entity` directly after `after_id`.
    pub fn add_after(&mut self, entity: E, after_id: EntityId) -> bool {
        let Some(k) = self.reference_order(entity.id(), after_id, "add_after") else {
            return false;
        };
        self.place(entity, "add_after", |v| allocator::insert_after(v, k))
    }

    /// Inserts `entity` at the front.
    pub fn add_as_first(&mut self, entity: E) -> bool {
        self.place(entity, "add_as_first", allocator::insert_as_first)
    }

    /// Inserts `entity` after the current last entity.
    pub fn add_as_last(&mut self, entity: E) -> bool {
        self.place(entity, "add_as_last", |v| allocator::next_order(v))
    }

    // ── Moves ────────────────────────────────────────────────────

    /// Moves `id` directly after `after_id`.
    pub fn move_after(&mut self, id: EntityId, after_id: EntityId) -> bool {
        if !self.knows(id, "move_after") {
            return false;
        }
        let Some(k) = self.reference_order(id, after_id, "move_after") else {
            return false;
        };
        let moved = allocator::move_after(&mut self.entities, id, k);
        self.settle(id, moved, "move_after")
    }

    /// Moves `id` directly before `before_id`.
    pub fn move_before(&mut self, id: EntityId, before_id: EntityId) -> bool {
        if !self.knows(id, "move_before") {
            return false;
        }
        let Some(k) = self.reference_order(id, before_id, "move_before") else {
            return false;
        };
        let moved = allocator::move_before(&mut self.entities, id, k);
        self.settle(id, moved, "move_before")
    }

    /// Moves `id` to the front.
    pub fn move_as_first(&mut self, id: EntityId) -> bool {
        if !self.knows(id, "move_as_first") {
            return false;
        }
        let moved = allocator::move_as_first(&mut self.entities, id);
        self.settle(id, moved, "move_as_first")
    }

    /// Moves `id` past the current last entity.
    pub fn move_as_last(&mut self, id: EntityId) -> bool {
        if !self.knows(id, "move_as_last") {
            return false;
        }
        let moved = allocator::move_as_last(&mut self.entities, id);
        self.settle(id, moved, "move_as_last")
    }

    // ── Removal & updates ────────────────────────────────────────

    /// Removes `id` alone. Remaining keys are left as they are (gaps are
    /// fine). Children of `id` keep pointing at it; use
    /// [`remove_cascade`](Self::remove_cascade) for tree-shaped kinds.
    pub fn remove(&mut self, id: EntityId) -> Option<E> {
        let Some(pos) = self.index.get(id) else {
            debug!("remove: {id} not found");
            return None;
        };
        let removed = self.entities.remove(pos);
        self.index.rebuild(&self.entities);
        Some(removed)
    }

    /// Removes `id` together with every entity whose parent chain passes
    /// through it, returning them parent first in depth-first order.
    ///
    /// Unknown ids remove nothing. For flat kinds this is
    /// [`remove`](Self::remove).
    pub fn remove_cascade(&mut self, id: EntityId) -> Vec<E> {
        if !self.contains(id) {
            debug!("remove_cascade: {id} not found");
            return Vec::new();
        }
        let mut doomed = vec![id];
        doomed.extend(self.descendants(id));
        let victims: HashSet<EntityId> = doomed.iter().copied().collect();

        let (removed, kept): (Vec<E>, Vec<E>) = std::mem::take(&mut self.entities)
            .into_iter()
            .partition(|e| victims.contains(&e.id()));
        self.entities = kept;
        self.index.rebuild(&self.entities);

        let mut removed: HashMap<EntityId, E> =
            removed.into_iter().map(|e| (e.id(), e)).collect();
        if doomed.len() > 1 {
            debug!("remove_cascade: {id} took {} descendants", doomed.len() - 1);
        }
        doomed.iter().filter_map(|d| removed.remove(d)).collect()
    }

    /// Every entity below `id` in depth-first display order, siblings in
    /// key order, `id` excluded.
    #[must_use]
    pub fn descendants(&self, id: EntityId) -> Vec<EntityId> {
        let mut children: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        for e in &self.entities {
            if let Some(parent) = e.parent_id() {
                children.entry(parent).or_default().push(e.id());
            }
        }

        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut stack: Vec<EntityId> = children
            .get(&id)
            .map(|c| c.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            out.push(next);
            if let Some(grand) = children.get(&next) {
                stack.extend(grand.iter().rev().copied());
            }
        }
        out
    }

    /// Merges `patch` into the entity `id` in place.
    pub fn update_fields<P: Patch<E>>(&mut self, id: EntityId, patch: P) -> bool {
        let Some(pos) = self.index.get(id) else {
            debug!("update_fields: {id} not found");
            return false;
        };
        let before = self.entities[pos].order();
        patch.apply_to(&mut self.entities[pos]);
        if self.entities[pos].order() != before {
            self.resort();
        }
        true
    }

    // ── Internals ────────────────────────────────────────────────

    /// Re-sorts by (order, id) and rebuilds the index.
    pub(crate) fn resort(&mut self) {
        self.entities
            .sort_by(|a, b| a.order().cmp(&b.order()).then_with(|| a.id().cmp(&b.id())));
        self.index.rebuild(&self.entities);
    }

    fn knows(&self, id: EntityId, op: &str) -> bool {
        let known = self.contains(id);
        if !known {
            debug!("{op}: {id} not found, dropping");
        }
        known
    }

    /// Order key of the reference entity, or `None` if it is missing or is
    /// the subject of the operation itself.
    fn reference_order(&self, subject: EntityId, reference: EntityId, op: &str) -> Option<i64> {
        if subject == reference {
            debug!("{op}: {subject} placed relative to itself, dropping");
            return None;
        }
        let order = self.get(reference).map(Ordered::order);
        if order.is_none() {
            debug!("{op}: reference {reference} not found, dropping");
        }
        order
    }

    /// Drops any existing copy of `entity`, lets `allocate` pick its key
    /// against the remaining entities, then inserts it.
    ///
    /// If no key is left the existing copy is put back as it was.
    fn place(
        &mut self,
        mut entity: E,
        op: &str,
        allocate: impl FnOnce(&mut [E]) -> Option<i64>,
    ) -> bool {
        let previous = self
            .index
            .get(entity.id())
            .map(|pos| self.entities.remove(pos));
        let placed = match allocate(&mut self.entities) {
            Some(order) => {
                entity.set_order(order);
                self.entities.push(entity);
                true
            }
            None => {
                warn!("{op}: order keys exhausted, dropping {}", entity.id());
                self.entities.extend(previous);
                false
            }
        };
        self.resort();
        placed
    }

    /// Finishes a move: re-sorts if the allocator assigned a key.
    fn settle(&mut self, id: EntityId, moved: Option<i64>, op: &str) -> bool {
        if moved.is_none() {
            warn!("{op}: order keys exhausted, dropping move of {id}");
            return false;
        }
        self.resort();
        true
    }
}

impl<E: Ordered> FromIterator<E> for OrderedStore<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_entities(iter)
    }
}

impl<'a, E> IntoIterator for &'a OrderedStore<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
