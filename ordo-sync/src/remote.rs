//! Remote store abstraction.
//!
//! The remote store is the source of truth for every collection. Each call
//! returns the canonical post-mutation entity, which the caller reconciles
//! into its local collection.

use crate::error::SyncResult;
use crate::protocol::Placement;
use async_trait::async_trait;
use ordo_types::EntityId;

/// Abstract remote store for one entity kind.
#[async_trait]
pub trait RemoteStore<E>: Send + Sync
where
    E: Send + Sync + 'static,
{
    /// Creates `entity` at `placement` and returns the stored copy.
    async fn create(&self, entity: &E, placement: Placement) -> SyncResult<E>;

    /// Overwrites the fields of an existing entity. The order key sent is
    /// ignored; ordering only changes through [`move_to`](Self::move_to).
    async fn update(&self, entity: &E) -> SyncResult<E>;

    /// Moves an existing entity.
    async fn move_to(&self, id: EntityId, placement: Placement) -> SyncResult<E>;

    /// Deletes an entity together with every entity whose parent chain
    /// passes through it.
    async fn delete(&self, id: EntityId) -> SyncResult<()>;

    /// Every entity of this kind the user can see.
    async fn fetch_all(&self) -> SyncResult<Vec<E>>;
}

/// In-memory remote store for tests.
pub mod mock {
    use super::*;
    use crate::applicator;
    use crate::error::SyncError;
    use ordo_order::{Ordered, OrderedStore};
    use ordo_types::Timestamp;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use std::time::Duration;

    /// Hook that refreshes server-managed fields (e.g. `modified_at`) on
    /// every write.
    pub type StampFn<E> = fn(&mut E, Timestamp);

    /// A remote store backed by its own [`OrderedStore`], allocating order
    /// keys the same way the client does.
    #[derive(Debug)]
    pub struct MemoryRemote<E> {
        store: Mutex<OrderedStore<E>>,
        calls: Mutex<Vec<&'static str>>,
        failing: AtomicBool,
        delay_ms: AtomicU64,
        stamp: Option<StampFn<E>>,
    }

    impl<E: Ordered> Default for MemoryRemote<E> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E: Ordered> MemoryRemote<E> {
        pub fn new() -> Self {
            Self::with_entities(Vec::new())
        }

        /// Creates a remote already holding `entities`.
        pub fn with_entities(entities: Vec<E>) -> Self {
            Self {
                store: Mutex::new(OrderedStore::from_entities(entities)),
                calls: Mutex::new(Vec::new()),
                failing: AtomicBool::new(false),
                delay_ms: AtomicU64::new(0),
                stamp: None,
            }
        }

        /// Installs a hook run on every entity the remote writes.
        #[must_use]
        pub fn with_stamp(mut self, stamp: StampFn<E>) -> Self {
            self.stamp = Some(stamp);
            self
        }

        /// Makes every subsequent call fail with [`SyncError::Remote`].
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        /// Delays every subsequent call.
        pub fn set_delay(&self, delay: Duration) {
            let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            self.delay_ms.store(millis, Ordering::SeqCst);
        }

        /// The remote's current contents, in order.
        pub fn snapshot(&self) -> Vec<E> {
            self.lock_store().as_slice().to_vec()
        }

        /// Names of the calls received so far.
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Edits the remote directly, as another device would.
        pub fn edit(&self, f: impl FnOnce(&mut OrderedStore<E>)) {
            f(&mut self.lock_store());
        }

        fn lock_store(&self) -> MutexGuard<'_, OrderedStore<E>> {
            self.store.lock().unwrap_or_else(PoisonError::into_inner)
        }

        async fn gate(&self, call: &'static str) -> SyncResult<()> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(call);
            let delay = self.delay_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(SyncError::Remote(format!("{call}: injected failure")));
            }
            Ok(())
        }

        /// Runs the stamp hook on `id` and returns the stored copy.
        fn stamped(&self, store: &mut OrderedStore<E>, id: EntityId) -> SyncResult<E> {
            let mut entity = store.get(id).cloned().ok_or(SyncError::NotFound(id))?;
            if let Some(stamp) = self.stamp {
                stamp(&mut entity, Timestamp::now());
                store.add(entity.clone());
            }
            Ok(entity)
        }
    }

    #[async_trait]
    impl<E> RemoteStore<E> for MemoryRemote<E>
    where
        E: Ordered + Send + Sync + 'static,
    {
        async fn create(&self, entity: &E, placement: Placement) -> SyncResult<E> {
            self.gate("create").await?;
            let mut store = self.lock_store();
            if !applicator::place(&mut store, entity.clone(), placement) {
                return Err(SyncError::Remote(format!(
                    "create: invalid placement {placement:?}"
                )));
            }
            self.stamped(&mut store, entity.id())
        }

        async fn update(&self, entity: &E) -> SyncResult<E> {
            self.gate("update").await?;
            let mut store = self.lock_store();
            let id = entity.id();
            let order = store.get(id).map(Ordered::order).ok_or(SyncError::NotFound(id))?;
            let mut updated = entity.clone();
            updated.set_order(order);
            store.add(updated);
            self.stamped(&mut store, id)
        }

        async fn move_to(&self, id: EntityId, placement: Placement) -> SyncResult<E> {
            self.gate("move").await?;
            let mut store = self.lock_store();
            if !store.contains(id) {
                return Err(SyncError::NotFound(id));
            }
            applicator::relocate(&mut store, id, placement);
            self.stamped(&mut store, id)
        }

        async fn delete(&self, id: EntityId) -> SyncResult<()> {
            self.gate("delete").await?;
            if self.lock_store().remove_cascade(id).is_empty() {
                return Err(SyncError::NotFound(id));
            }
            Ok(())
        }

        async fn fetch_all(&self) -> SyncResult<Vec<E>> {
            self.gate("fetch_all").await?;
            Ok(self.snapshot())
        }
    }
}
