//! Ordered entity collections for Ordo.
//!
//! This crate holds the one piece of real logic the client needs: keeping
//! in-memory collections ordered by an integer order key while the user
//! reorders them locally and the server pushes snapshots.
//!
//! - [`allocator`]: assigns and shifts order keys for insert/move
//! - [`EntityIndex`]: id → position lookup over the sorted collection
//! - [`OrderedStore<E>`]: the collection itself, with insert/move/remove/update
//! - Reconciliation ([`OrderedStore::sync`]): folds remote snapshots in, remote wins
//! - [`Hierarchy`]: derived depth/ancestor/visibility views for tree-shaped kinds
//!
//! Local operations uphold one invariant: no two entities in a collection
//! share an order key once the operation returns. References to unknown ids
//! are silently dropped; the caller re-reads state anyway.

pub mod allocator;
mod entity;
mod error;
mod hierarchy;
mod index;
mod reconcile;
mod store;

pub use entity::{Hierarchical, Ordered, Patch};
pub use error::{HierarchyError, HierarchyResult};
pub use hierarchy::{Hierarchy, TreeRow};
pub use index::EntityIndex;
pub use reconcile::{RemoteApplied, SyncReport};
pub use store::OrderedStore;
