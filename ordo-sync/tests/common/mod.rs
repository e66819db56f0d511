//! Shared test helpers for sync tests.

#![allow(dead_code)]

use ordo_model::{Label, LabelPatch, Project};
use ordo_order::Ordered;
use ordo_sync::remote::mock::MemoryRemote;
use ordo_sync::{Collection, LocalOp, Placement, SyncConfig, SyncEngine};
use ordo_types::{EntityId, Timestamp};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn id(raw: i64) -> EntityId {
    EntityId::new(raw)
}

pub fn ts(millis: i64) -> Timestamp {
    Timestamp::from_millis(millis).unwrap()
}

/// A label with a fixed timestamp, so copies compare equal.
pub fn label(raw: i64, order: i64) -> Label {
    let mut l = Label::new(id(raw), format!("label-{raw}")).with_order(order);
    l.modified_at = ts(1_000);
    l
}

pub fn labels(pairs: &[(i64, i64)]) -> Vec<Label> {
    pairs.iter().map(|&(i, o)| label(i, o)).collect()
}

pub fn project(raw: i64, order: i64, parent: Option<i64>) -> Project {
    let mut p = Project::new(id(raw), format!("project-{raw}"))
        .with_order(order)
        .with_modified_at(ts(1_000));
    p.parent_id = parent.map(id);
    p
}

/// `(id, order)` pairs in order.
pub fn layout<E: Ordered>(entities: &[E]) -> Vec<(i64, i64)> {
    entities.iter().map(|e| (e.id().get(), e.order())).collect()
}

/// Refreshes `modified_at` the way the server does on every write.
pub fn stamp_label(label: &mut Label, now: Timestamp) {
    label.modified_at = now;
}

pub fn fast_config() -> SyncConfig {
    SyncConfig {
        poll_interval_ms: 1_000,
        request_timeout_ms: 500,
        poll_on_start: true,
    }
}

/// An engine over a fresh label collection, with the remote and local
/// side both holding `pairs`.
pub async fn label_engine(
    pairs: &[(i64, i64)],
) -> (SyncEngine<Label, MemoryRemote<Label>>, Arc<MemoryRemote<Label>>) {
    let remote = Arc::new(MemoryRemote::with_entities(labels(pairs)));
    let engine = SyncEngine::new(Collection::new(), Arc::clone(&remote), fast_config());
    engine.bootstrap().await.unwrap();
    (engine, remote)
}

pub fn add(entity: Label, placement: Placement) -> LocalOp<Label, LabelPatch> {
    LocalOp::Add { entity, placement }
}

pub fn rename(raw: i64, name: &str) -> LocalOp<Label, LabelPatch> {
    LocalOp::Update {
        id: id(raw),
        patch: LabelPatch {
            name: Some(name.into()),
            ..Default::default()
        },
    }
}

pub fn move_to(raw: i64, placement: Placement) -> LocalOp<Label, LabelPatch> {
    LocalOp::Move {
        id: id(raw),
        placement,
    }
}

pub fn remove(raw: i64) -> LocalOp<Label, LabelPatch> {
    LocalOp::Remove { id: id(raw) }
}
