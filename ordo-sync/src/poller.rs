//! Background poller that periodically folds the remote snapshot into a
//! collection.

use crate::engine::SyncEngine;
use crate::error::{SyncError, SyncResult};
use crate::remote::RemoteStore;
use ordo_order::Ordered;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Handle to a running poller.
#[derive(Debug)]
pub struct SyncPoller {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    polls: Arc<AtomicU64>,
}

impl SyncPoller {
    /// Spawns a poller for `engine` on the current tokio runtime.
    ///
    /// Each tick calls [`SyncEngine::poll_once`]. Failures are logged and
    /// the next tick tries again.
    pub fn spawn<E, R>(engine: Arc<SyncEngine<E, R>>) -> Self
    where
        E: Ordered + Send + Sync + 'static,
        R: RemoteStore<E> + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let polls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&polls);

        let task = tokio::spawn(async move {
            let period = engine.config().poll_interval();
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            if !engine.config().poll_on_start {
                // The first tick completes immediately.
                ticker.tick().await;
            }
            info!("poller started, every {period:?}");

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        match engine.poll_once().await {
                            Ok(outcome) => debug!("poll: {:?}", outcome.applied),
                            Err(e) => warn!("poll failed: {e}"),
                        }
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
            info!("poller stopped");
        });

        Self {
            shutdown: Some(shutdown_tx),
            task,
            polls,
        }
    }

    /// Completed poll attempts, successful or not.
    pub fn polls(&self) -> u64 {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Signals the poller to stop and waits for it to exit.
    pub async fn stop(mut self) -> SyncResult<()> {
        if let Some(tx) = self.shutdown.take() {
            // A send error means the task already exited.
            let _ = tx.send(());
        }
        (&mut self.task).await.map_err(|e| SyncError::TaskJoin(e.to_string()))
    }
}

impl Drop for SyncPoller {
    fn drop(&mut self) {
        if self.shutdown.is_some() {
            self.task.abort();
        }
    }
}
