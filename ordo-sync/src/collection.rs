//! A shared, lockable collection of one entity kind.
//!
//! Local mutations and remote results are serialized through one
//! `RwLock`, so each is applied atomically and results are folded in in
//! the order they arrive.

use crate::applicator::{self, Reconciled};
use crate::protocol::{LocalOp, RemoteResult};
use crate::state::PendingRequests;
use ordo_order::{
    Hierarchical, Hierarchy, HierarchyResult, Ordered, OrderedStore, Patch, TreeRow,
};
use ordo_types::{EntityId, RequestId};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Outcome of folding one remote result into a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The request this result answers, if any. Pushed and polled
    /// snapshots answer nothing.
    pub request: Option<RequestId>,
    pub applied: Reconciled,
    /// A newer local edit to the same entity was still outstanding, so this
    /// result may have overwritten it.
    pub stale: bool,
}

/// One kind's ordered collection plus its outstanding requests.
///
/// Cloning is cheap and yields a handle to the same collection.
#[derive(Debug)]
pub struct Collection<E> {
    store: Arc<RwLock<OrderedStore<E>>>,
    pending: Arc<Mutex<PendingRequests>>,
}

impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<E: Ordered> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ordered> Collection<E> {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(OrderedStore::new())),
            pending: Arc::new(Mutex::new(PendingRequests::new())),
        }
    }

    /// Replaces the contents with a fresh snapshot and forgets every
    /// outstanding request.
    pub async fn load(&self, entities: Vec<E>) {
        let mut store = self.store.write().await;
        store.load(entities);
        self.pending.lock().await.clear();
    }

    /// Empties the collection.
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        store.clear();
        self.pending.lock().await.clear();
    }

    /// Runs `f` against the store under a read lock.
    pub async fn read<R>(&self, f: impl FnOnce(&OrderedStore<E>) -> R) -> R {
        f(&*self.store.read().await)
    }

    pub async fn get(&self, id: EntityId) -> Option<E> {
        self.store.read().await.get(id).cloned()
    }

    /// Every entity, in order.
    pub async fn snapshot(&self) -> Vec<E> {
        self.store.read().await.as_slice().to_vec()
    }

    pub async fn ids(&self) -> Vec<EntityId> {
        self.store.read().await.ids()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Applies a user mutation immediately.
    ///
    /// Returns the id under which the matching remote call is tracked, or
    /// `None` if the operation was dropped locally (unknown id or
    /// reference), in which case nothing should be sent.
    pub async fn apply_local<P: Patch<E>>(&self, op: LocalOp<E, P>) -> Option<RequestId> {
        let subject = op.subject();
        let name = op.name();
        let mut store = self.store.write().await;
        if !applicator::apply_local(&mut store, op) {
            debug!("{name} on {subject} dropped locally");
            return None;
        }
        let request = self.pending.lock().await.register(subject);
        debug!("{name} on {subject} applied locally, awaiting {request}");
        Some(request)
    }

    /// Folds a remote result in. Remote data overwrites local data even
    /// when the outcome is flagged stale.
    pub async fn reconcile(
        &self,
        request: Option<RequestId>,
        result: RemoteResult<E>,
    ) -> ReconcileOutcome {
        let mut store = self.store.write().await;
        let mut pending = self.pending.lock().await;

        let stale = match (&request, &result) {
            (Some(req), _) => {
                let newer = pending.has_newer(*req);
                pending.complete(*req);
                newer
            }
            (None, RemoteResult::Saved(entity)) => pending.outstanding(entity.id()) > 0,
            (None, RemoteResult::Deleted(id)) => pending.outstanding(*id) > 0,
            (None, RemoteResult::Batch(batch)) => {
                batch.iter().any(|e| pending.outstanding(e.id()) > 0)
            }
        };
        drop(pending);

        if stale {
            warn!(
                "reconciling over a newer local edit (request {:?}); remote copy wins",
                request
            );
        }

        let applied = applicator::reconcile(&mut store, result);
        ReconcileOutcome {
            request,
            applied,
            stale,
        }
    }

    /// Forgets a request whose remote call failed. Local state is kept.
    pub async fn abandon(&self, request: RequestId) {
        if self.pending.lock().await.complete(request).is_some() {
            debug!("request {request} abandoned");
        }
    }

    /// Requests still waiting for an answer.
    pub async fn outstanding(&self) -> usize {
        self.pending.lock().await.len()
    }
}

impl<E: Hierarchical> Collection<E> {
    /// The flattened tree for rendering.
    pub async fn rows(&self) -> HierarchyResult<Vec<TreeRow>> {
        Hierarchy::new(&*self.store.read().await).rows()
    }
}
