use ordo_types::{EntityId, Timestamp};
use std::fmt::Debug;

/// An entity that lives in an ordered collection.
///
/// The id is immutable; the order key is owned by the collection and only
/// changed through [`OrderedStore`](crate::OrderedStore) operations.
pub trait Ordered: Clone + PartialEq + Debug {
    /// Unique id within the collection.
    fn id(&self) -> EntityId;

    /// Current order key.
    fn order(&self) -> i64;

    /// Overwrites the order key.
    fn set_order(&mut self, order: i64);

    /// Authoritative modification time, as last reported by the remote store.
    fn modified_at(&self) -> Timestamp;

    /// Parent id within the same collection, `None` for roots.
    ///
    /// Flat kinds keep the default. Removing an entity through
    /// [`OrderedStore::remove_cascade`](crate::OrderedStore::remove_cascade)
    /// also removes everything that names it here.
    fn parent_id(&self) -> Option<EntityId> {
        None
    }

    /// Overwrites this entity with the remote copy.
    ///
    /// Remote wins on every persisted field. Kinds that carry client-only
    /// view state (e.g. a collapsed flag) override this to keep it.
    fn absorb(&mut self, remote: &Self) {
        *self = remote.clone();
    }
}

/// An ordered entity rendered as a tree through its
/// [`parent_id`](Ordered::parent_id).
pub trait Hierarchical: Ordered {
    /// Whether the entity's children are hidden in the rendered tree.
    fn is_collapsed(&self) -> bool {
        false
    }
}

/// A partial update of an entity's mutable fields.
///
/// Implementations must not touch the id. They may refresh `modified_at`
/// from the authoritative response they were built from.
pub trait Patch<E> {
    /// Merges the set fields into `entity`.
    fn apply_to(self, entity: &mut E);
}
