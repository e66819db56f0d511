//! Parent/child views over a store of hierarchical entities.
//!
//! Nothing here is stored: depth, ancestors and visibility are recomputed
//! from `parent_id` on every call, so they can never drift from the store.
//! Parent chains are expected to be acyclic (the remote store enforces
//! that); a cycle or dangling parent is reported as a [`HierarchyError`]
//! instead of being looped over or truncated.

use crate::{Hierarchical, HierarchyError, HierarchyResult, OrderedStore};
use ordo_types::EntityId;
use std::collections::{HashMap, HashSet};

/// One line of the flattened tree, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow {
    pub id: EntityId,
    pub depth: usize,
    pub has_children: bool,
    /// `false` when any ancestor is collapsed.
    pub visible: bool,
}

/// Read-only hierarchy view borrowing an [`OrderedStore`].
#[derive(Debug, Clone, Copy)]
pub struct Hierarchy<'a, E> {
    store: &'a OrderedStore<E>,
}

impl<'a, E: Hierarchical> Hierarchy<'a, E> {
    #[must_use]
    pub fn new(store: &'a OrderedStore<E>) -> Self {
        Self { store }
    }

    /// Ancestor ids of `id`, root first. Empty for a root.
    pub fn ancestors(&self, id: EntityId) -> HierarchyResult<Vec<EntityId>> {
        let entity = self
            .store
            .get(id)
            .ok_or(HierarchyError::UnknownEntity(id))?;

        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut child = id;
        let mut next = entity.parent_id();

        while let Some(parent) = next {
            if !seen.insert(parent) {
                return Err(HierarchyError::Cycle(parent));
            }
            let parent_entity = self
                .store
                .get(parent)
                .ok_or(HierarchyError::MissingParent { child, parent })?;
            chain.push(parent);
            child = parent;
            next = parent_entity.parent_id();
        }

        chain.reverse();
        Ok(chain)
    }

    /// Distance from `id` to its root; 0 for roots.
    pub fn indent_depth(&self, id: EntityId) -> HierarchyResult<usize> {
        self.ancestors(id).map(|chain| chain.len())
    }

    /// Whether any entity names `id` as its parent.
    #[must_use]
    pub fn has_children(&self, id: EntityId) -> bool {
        self.store.iter().any(|e| e.parent_id() == Some(id))
    }

    /// Direct children of `id`, in order.
    #[must_use]
    pub fn children(&self, id: EntityId) -> Vec<&'a E> {
        self.store
            .iter()
            .filter(|e| e.parent_id() == Some(id))
            .collect()
    }

    /// Entities without a parent, in order.
    #[must_use]
    pub fn roots(&self) -> Vec<&'a E> {
        self.store
            .iter()
            .filter(|e| e.parent_id().is_none())
            .collect()
    }

    /// All descendants of `id` in depth-first display order, `id` excluded.
    #[must_use]
    pub fn descendants(&self, id: EntityId) -> Vec<EntityId> {
        self.store.descendants(id)
    }

    /// Whether `id` is shown, i.e. no ancestor is collapsed.
    pub fn is_visible(&self, id: EntityId) -> HierarchyResult<bool> {
        let chain = self.ancestors(id)?;
        Ok(chain
            .iter()
            .filter_map(|a| self.store.get(*a))
            .all(|a| !a.is_collapsed()))
    }

    /// Checks every parent chain in the collection.
    pub fn validate(&self) -> HierarchyResult<()> {
        for e in self.store.iter() {
            self.ancestors(e.id())?;
        }
        Ok(())
    }

    /// The whole tree flattened depth-first, siblings in order.
    pub fn rows(&self) -> HierarchyResult<Vec<TreeRow>> {
        self.validate()?;
        let children = self.children_map();
        let mut rows = Vec::with_capacity(self.store.len());
        // (id, depth, visible)
        let mut stack: Vec<(EntityId, usize, bool)> = children
            .get(&None)
            .map(|roots| roots.iter().rev().map(|&r| (r, 0, true)).collect())
            .unwrap_or_default();

        while let Some((id, depth, visible)) = stack.pop() {
            let kids = children.get(&Some(id));
            rows.push(TreeRow {
                id,
                depth,
                has_children: kids.is_some_and(|k| !k.is_empty()),
                visible,
            });
            if let Some(kids) = kids {
                let collapsed = self.store.get(id).is_some_and(Hierarchical::is_collapsed);
                let child_visible = visible && !collapsed;
                stack.extend(kids.iter().rev().map(|&k| (k, depth + 1, child_visible)));
            }
        }
        Ok(rows)
    }

    /// parent → children, each list in store order.
    fn children_map(&self) -> HashMap<Option<EntityId>, Vec<EntityId>> {
        let mut map: HashMap<Option<EntityId>, Vec<EntityId>> = HashMap::new();
        for e in self.store.iter() {
            map.entry(e.parent_id()).or_default().push(e.id());
        }
        map
    }
}
