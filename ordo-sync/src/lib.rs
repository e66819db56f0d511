//! Session layer for Ordo: local operations, remote results and polling.
//!
//! Every user mutation goes through two explicit steps:
//!
//! 1. **Apply locally**: the [`LocalOp`] is applied to the in-memory
//!    [`Collection`] at once, so the UI never waits on the network.
//! 2. **Reconcile**: the remote store's answer ([`RemoteResult`]) is folded
//!    back in whenever it arrives. Remote data always wins.
//!
//! ## Components
//!
//! - **Protocol**: [`Placement`], [`LocalOp`], [`RemoteResult`]
//! - **Applicator**: maps those messages onto an `OrderedStore`
//! - **State**: [`PendingRequests`], outstanding remote calls per entity
//! - **Collection**: one kind's store behind an async lock
//! - **Remote**: the [`RemoteStore`] trait, plus an in-memory mock
//! - **Engine**: [`SyncEngine`], local apply → remote call → reconcile
//! - **Poller**: [`SyncPoller`], periodic full-snapshot sync
//! - **Session**: [`Session`], every kind's collection for one login
//!
//! Remote failures never roll back local state. A response that lands
//! after a newer local edit to the same entity still overwrites it; the
//! outcome is flagged [`stale`](ReconcileOutcome::stale) so callers can
//! tell.
//!
//! # Example
//!
//! ```
//! use ordo_model::{Label, LabelPatch};
//! use ordo_sync::remote::mock::MemoryRemote;
//! use ordo_sync::{LocalOp, Placement, Session, SyncConfig, SyncEngine};
//! use ordo_types::EntityId;
//! use std::sync::Arc;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let session = Session::start();
//! let remote = Arc::new(MemoryRemote::<Label>::new());
//! let engine = SyncEngine::new(session.labels().clone(), remote, SyncConfig::default());
//!
//! let op: LocalOp<Label, LabelPatch> = LocalOp::Add {
//!     entity: Label::new(EntityId::new(1), "urgent"),
//!     placement: Placement::Last,
//! };
//! engine.submit(op).await.unwrap();
//! assert_eq!(session.labels().len().await, 1);
//! # });
//! ```

pub mod applicator;
mod collection;
mod engine;
mod error;
mod poller;
pub mod protocol;
pub mod remote;
mod session;
pub mod state;

pub use applicator::Reconciled;
pub use collection::{Collection, ReconcileOutcome};
pub use engine::{SyncConfig, SyncEngine};
pub use error::{SyncError, SyncResult};
pub use poller::SyncPoller;
pub use protocol::{LocalOp, Placement, RemoteResult};
pub use remote::RemoteStore;
pub use session::{Session, SessionKind};
pub use state::PendingRequests;
