//! Sync engine: applies a local operation, forwards it to the remote store,
//! then reconciles the answer.
//!
//! The engine never rolls back. If the remote call fails or times out the
//! optimistic local state stays and the error goes back to the caller.

use crate::collection::{Collection, ReconcileOutcome};
use crate::error::{SyncError, SyncResult};
use crate::protocol::{LocalOp, Placement, RemoteResult};
use crate::remote::RemoteStore;
use ordo_order::{Ordered, Patch};
use ordo_types::{EntityId, RequestId};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Configuration for the sync engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// How often the poller fetches a full snapshot (ms).
    pub poll_interval_ms: u64,
    /// Upper bound on a single remote call (ms).
    pub request_timeout_ms: u64,
    /// Whether the poller fetches immediately on start.
    pub poll_on_start: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 30_000,
            request_timeout_ms: 10_000,
            poll_on_start: true,
        }
    }
}

impl SyncConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> SyncResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Poll period, never shorter than one millisecond.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// The remote call a local operation turns into.
#[derive(Debug, Clone, Copy)]
enum RemoteCall {
    Create(Placement),
    Update,
    Move(Placement),
    Delete,
}

impl RemoteCall {
    fn for_op<E, P>(op: &LocalOp<E, P>) -> Self {
        match op {
            LocalOp::Add { placement, .. } => RemoteCall::Create(*placement),
            LocalOp::Update { .. } => RemoteCall::Update,
            LocalOp::Move { placement, .. } => RemoteCall::Move(*placement),
            LocalOp::Remove { .. } => RemoteCall::Delete,
        }
    }
}

/// Drives one collection against one remote store.
#[derive(Debug)]
pub struct SyncEngine<E, R> {
    collection: Collection<E>,
    remote: Arc<R>,
    config: SyncConfig,
}

impl<E, R> SyncEngine<E, R>
where
    E: Ordered + Send + Sync + 'static,
    R: RemoteStore<E>,
{
    pub fn new(collection: Collection<E>, remote: Arc<R>, config: SyncConfig) -> Self {
        Self {
            collection,
            remote,
            config,
        }
    }

    pub fn collection(&self) -> &Collection<E> {
        &self.collection
    }

    pub fn remote(&self) -> &Arc<R> {
        &self.remote
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Replaces the collection with the remote's full contents.
    pub async fn bootstrap(&self) -> SyncResult<usize> {
        let entities = self.bounded(self.remote.fetch_all()).await?;
        let count = entities.len();
        self.collection.load(entities).await;
        info!("bootstrapped {count} entities");
        Ok(count)
    }

    /// Applies `op` locally, sends it to the remote store and reconciles the
    /// answer.
    ///
    /// Returns `Ok(None)` when the operation was dropped locally (unknown id
    /// or reference); no remote call is made in that case.
    pub async fn submit<P: Patch<E>>(
        &self,
        op: LocalOp<E, P>,
    ) -> SyncResult<Option<ReconcileOutcome>> {
        let subject = op.subject();
        let name = op.name();
        let call = RemoteCall::for_op(&op);

        let Some(request) = self.collection.apply_local(op).await else {
            return Ok(None);
        };

        let result = match call {
            RemoteCall::Create(placement) => match self.collection.get(subject).await {
                Some(entity) => self
                    .bounded(self.remote.create(&entity, placement))
                    .await
                    .map(RemoteResult::Saved),
                None => Err(SyncError::NotFound(subject)),
            },
            RemoteCall::Update => match self.collection.get(subject).await {
                Some(entity) => self
                    .bounded(self.remote.update(&entity))
                    .await
                    .map(RemoteResult::Saved),
                None => Err(SyncError::NotFound(subject)),
            },
            RemoteCall::Move(placement) => self
                .bounded(self.remote.move_to(subject, placement))
                .await
                .map(RemoteResult::Saved),
            RemoteCall::Delete => self
                .bounded(self.remote.delete(subject))
                .await
                .map(|()| RemoteResult::Deleted(subject)),
        };

        self.finish(request, name, subject, result).await.map(Some)
    }

    /// Fetches the full remote batch and folds it in with `sync`.
    pub async fn poll_once(&self) -> SyncResult<ReconcileOutcome> {
        let batch = self.bounded(self.remote.fetch_all()).await?;
        let outcome = self
            .collection
            .reconcile(None, RemoteResult::Batch(batch))
            .await;
        debug!("poll applied: {:?}", outcome.applied);
        Ok(outcome)
    }

    /// Reconciles a successful answer, or abandons the request on failure.
    async fn finish(
        &self,
        request: RequestId,
        name: &str,
        subject: EntityId,
        result: SyncResult<RemoteResult<E>>,
    ) -> SyncResult<ReconcileOutcome> {
        match result {
            Ok(result) => Ok(self.collection.reconcile(Some(request), result).await),
            Err(e) => {
                warn!("{name} on {subject} failed remotely, keeping local state: {e}");
                self.collection.abandon(request).await;
                Err(e)
            }
        }
    }

    /// Runs a remote call under the configured timeout.
    async fn bounded<T>(&self, call: impl Future<Output = SyncResult<T>>) -> SyncResult<T> {
        tokio::time::timeout(self.config.request_timeout(), call)
            .await
            .map_err(|_| SyncError::Timeout)?
    }
}
