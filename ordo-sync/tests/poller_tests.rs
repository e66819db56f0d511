mod common;

use common::{fast_config, id, init_tracing, label, label_engine, layout};
use ordo_model::Label;
use ordo_sync::remote::mock::MemoryRemote;
use ordo_sync::{Collection, SyncConfig, SyncEngine, SyncPoller};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn poller_picks_up_remote_changes() {
    init_tracing();
    let (engine, remote) = label_engine(&[(1, 1)]).await;
    let engine = Arc::new(engine);
    remote.edit(|store| {
        store.add_as_last(label(2, 0));
    });

    let poller = SyncPoller::spawn(Arc::clone(&engine));
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(poller.polls() >= 1);
    assert_eq!(
        layout(&engine.collection().snapshot().await),
        vec![(1, 1), (2, 2)]
    );
    poller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn poller_ticks_on_interval() {
    let (engine, _remote) = label_engine(&[]).await;
    let poller = SyncPoller::spawn(Arc::new(engine));

    // Ticks at 0, 1000, 2000 and 3000 ms.
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(poller.polls(), 4);
    poller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn poll_on_start_false_waits_one_period() {
    let remote = Arc::new(MemoryRemote::<Label>::new());
    let config = SyncConfig {
        poll_on_start: false,
        ..fast_config()
    };
    let engine = Arc::new(SyncEngine::new(Collection::new(), Arc::clone(&remote), config));
    let poller = SyncPoller::spawn(engine);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(poller.polls(), 0);
    assert!(remote.calls().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(poller.polls(), 1);
    poller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn poller_survives_remote_failures() {
    let (engine, remote) = label_engine(&[(1, 1)]).await;
    let engine = Arc::new(engine);
    remote.set_failing(true);

    let poller = SyncPoller::spawn(Arc::clone(&engine));
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(poller.polls(), 2);
    assert!(poller.is_running());

    remote.set_failing(false);
    remote.edit(|store| {
        store.add_as_first(label(5, 0));
    });
    tokio::time::sleep(Duration::from_millis(1_000)).await;

    assert_eq!(engine.collection().ids().await, vec![id(5), id(1)]);
    poller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stop_ends_the_task() {
    let (engine, remote) = label_engine(&[]).await;
    let poller = SyncPoller::spawn(Arc::new(engine));
    tokio::time::sleep(Duration::from_millis(10)).await;
    poller.stop().await.unwrap();

    let calls = remote.calls().len();
    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert_eq!(remote.calls().len(), calls);
}
