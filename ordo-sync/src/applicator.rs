//! Applicator: maps protocol messages onto an [`OrderedStore`].
//!
//! Everything here is synchronous and lock-free; the caller owns the store.
//! [`Collection`](crate::Collection) wraps these functions with locking and
//! request tracking.

use crate::protocol::{LocalOp, Placement, RemoteResult};
use ordo_order::{Ordered, OrderedStore, Patch, RemoteApplied, SyncReport};
use ordo_types::EntityId;
use tracing::debug;

/// What reconciling one [`RemoteResult`] did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// A single saved entity was absorbed.
    Entity(RemoteApplied),
    /// A delete was applied; how many entities it removed, descendants
    /// included. 0 if the entity was already gone.
    Deleted(usize),
    /// A batch was synced.
    Batch(SyncReport),
}

impl Reconciled {
    /// Whether the store changed.
    pub fn changed_store(&self) -> bool {
        match self {
            Reconciled::Entity(applied) => *applied != RemoteApplied::Unchanged,
            Reconciled::Deleted(removed) => *removed > 0,
            Reconciled::Batch(report) => !report.is_noop(),
        }
    }
}

/// Inserts `entity` at `placement`. Returns `false` when the placement
/// names an unknown reference or no order key is left.
pub fn place<E: Ordered>(store: &mut OrderedStore<E>, entity: E, placement: Placement) -> bool {
    match placement {
        Placement::AsGiven => {
            store.add(entity);
            true
        }
        Placement::First => store.add_as_first(entity),
        Placement::Last => store.add_as_last(entity),
        Placement::After(after) => store.add_after(entity, after),
        Placement::Before(before) => store.add_before(entity, before),
    }
}

/// Moves `id` to `placement`. Returns `false` when nothing moved.
pub fn relocate<E: Ordered>(store: &mut OrderedStore<E>, id: EntityId, placement: Placement) -> bool {
    match placement {
        Placement::AsGiven => {
            debug!("relocate: {id} with AsGiven placement, nothing to do");
            false
        }
        Placement::First => store.move_as_first(id),
        Placement::Last => store.move_as_last(id),
        Placement::After(after) => store.move_after(id, after),
        Placement::Before(before) => store.move_before(id, before),
    }
}

/// Applies a user mutation to the store. Returns `false` if it was dropped.
///
/// Removing an entity also removes its descendants, as the remote store
/// does.
pub fn apply_local<E, P>(store: &mut OrderedStore<E>, op: LocalOp<E, P>) -> bool
where
    E: Ordered,
    P: Patch<E>,
{
    match op {
        LocalOp::Add { entity, placement } => place(store, entity, placement),
        LocalOp::Move { id, placement } => relocate(store, id, placement),
        LocalOp::Update { id, patch } => store.update_fields(id, patch),
        LocalOp::Remove { id } => !store.remove_cascade(id).is_empty(),
    }
}

/// Folds a remote answer into the store. Remote data always wins.
pub fn reconcile<E: Ordered>(store: &mut OrderedStore<E>, result: RemoteResult<E>) -> Reconciled {
    match result {
        RemoteResult::Saved(entity) => Reconciled::Entity(store.apply_remote(entity)),
        RemoteResult::Deleted(id) => Reconciled::Deleted(store.apply_remote_delete(id).len()),
        RemoteResult::Batch(batch) => Reconciled::Batch(store.sync(batch)),
    }
}
