//! Messages exchanged between the rendering layer, the local collections
//! and the remote store.
//!
//! The flow has two explicit halves:
//! 1. A [`LocalOp`] is applied to the in-memory collection immediately.
//! 2. The remote store answers with a [`RemoteResult`], which is reconciled
//!    into the collection whenever it arrives, in arrival order.

use ordo_types::EntityId;
use serde::{Deserialize, Serialize};

/// Where an entity should land relative to its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "at", content = "ref", rename_all = "snake_case")]
pub enum Placement {
    /// Keep the order key the entity already carries.
    AsGiven,
    First,
    Last,
    After(EntityId),
    Before(EntityId),
}

/// A mutation requested by the user, applied locally before anything is
/// sent to the remote store.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalOp<E, P> {
    /// Create `entity` at `placement`.
    Add { entity: E, placement: Placement },
    /// Move an existing entity. [`Placement::AsGiven`] is a no-op.
    Move { id: EntityId, placement: Placement },
    /// Merge a field patch.
    Update { id: EntityId, patch: P },
    /// Delete an entity together with its descendants.
    Remove { id: EntityId },
}

impl<E: ordo_order::Ordered, P> LocalOp<E, P> {
    /// The entity the operation is about.
    pub fn subject(&self) -> EntityId {
        match self {
            LocalOp::Add { entity, .. } => entity.id(),
            LocalOp::Move { id, .. } | LocalOp::Update { id, .. } | LocalOp::Remove { id } => *id,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            LocalOp::Add { .. } => "add",
            LocalOp::Move { .. } => "move",
            LocalOp::Update { .. } => "update",
            LocalOp::Remove { .. } => "remove",
        }
    }
}

/// What the remote store sent back.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResult<E> {
    /// Canonical post-mutation entity (create, update, move).
    Saved(E),
    /// The entity was deleted.
    Deleted(EntityId),
    /// A pushed or polled snapshot of many entities.
    Batch(Vec<E>),
}
