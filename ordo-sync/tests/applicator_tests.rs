mod common;

use common::{add, id, label, labels, layout, move_to, remove, rename};
use ordo_order::{OrderedStore, RemoteApplied, SyncReport};
use ordo_sync::applicator::{apply_local, place, reconcile, relocate};
use ordo_sync::{Placement, Reconciled, RemoteResult};
use pretty_assertions::assert_eq;

fn store(pairs: &[(i64, i64)]) -> OrderedStore<ordo_model::Label> {
    OrderedStore::from_entities(labels(pairs))
}

// ── place / relocate ─────────────────────────────────────────────

#[test]
fn place_at_each_position() {
    let mut s = store(&[(1, 1), (2, 2)]);
    assert!(place(&mut s, label(3, 0), Placement::After(id(1))));
    assert_eq!(layout(s.as_slice()), vec![(1, 1), (3, 2), (2, 3)]);

    assert!(place(&mut s, label(4, 0), Placement::Before(id(1))));
    assert_eq!(layout(s.as_slice()), vec![(4, 1), (1, 2), (3, 3), (2, 4)]);

    assert!(place(&mut s, label(5, 0), Placement::First));
    assert_eq!(s.ids()[0], id(5));

    assert!(place(&mut s, label(6, 0), Placement::Last));
    assert_eq!(*s.ids().last().unwrap(), id(6));
}

#[test]
fn place_as_given_keeps_key() {
    let mut s = store(&[(1, 1), (2, 9)]);
    assert!(place(&mut s, label(3, 4), Placement::AsGiven));
    assert_eq!(layout(s.as_slice()), vec![(1, 1), (3, 4), (2, 9)]);
}

#[test]
fn place_with_missing_reference_is_dropped() {
    let mut s = store(&[(1, 1)]);
    assert!(!place(&mut s, label(2, 0), Placement::After(id(99))));
    assert_eq!(layout(s.as_slice()), vec![(1, 1)]);
}

#[test]
fn relocate_each_way() {
    let mut s = store(&[(1, 1), (2, 2), (3, 3)]);
    assert!(relocate(&mut s, id(3), Placement::First));
    assert_eq!(s.ids(), vec![id(3), id(1), id(2)]);

    assert!(relocate(&mut s, id(3), Placement::Last));
    assert_eq!(s.ids(), vec![id(1), id(2), id(3)]);

    assert!(relocate(&mut s, id(1), Placement::After(id(2))));
    assert_eq!(s.ids(), vec![id(2), id(1), id(3)]);

    assert!(relocate(&mut s, id(3), Placement::Before(id(2))));
    assert_eq!(s.ids(), vec![id(3), id(2), id(1)]);
}

#[test]
fn relocate_as_given_does_nothing() {
    let mut s = store(&[(1, 1), (2, 2)]);
    let before = s.clone();
    assert!(!relocate(&mut s, id(1), Placement::AsGiven));
    assert_eq!(s, before);
}

// ── apply_local ──────────────────────────────────────────────────

#[test]
fn apply_local_add_after_scenario() {
    let mut s = store(&[(1, 1), (2, 2), (3, 3)]);
    assert!(apply_local(&mut s, add(label(4, 0), Placement::After(id(2)))));
    assert_eq!(layout(s.as_slice()), vec![(1, 1), (2, 2), (4, 3), (3, 4)]);
}

#[test]
fn apply_local_update_merges_fields() {
    let mut s = store(&[(1, 1)]);
    assert!(apply_local(&mut s, rename(1, "renamed")));
    assert_eq!(s.get(id(1)).unwrap().name, "renamed");
    assert_eq!(s.get(id(1)).unwrap().order, 1);
}

#[test]
fn apply_local_remove() {
    let mut s = store(&[(1, 1), (2, 2)]);
    assert!(apply_local(&mut s, remove(1)));
    assert!(!apply_local(&mut s, remove(1)));
    assert_eq!(layout(s.as_slice()), vec![(2, 2)]);
}

#[test]
fn apply_local_misses_are_dropped() {
    let mut s = store(&[(1, 1), (2, 2)]);
    let before = s.clone();
    assert!(!apply_local(&mut s, move_to(9, Placement::First)));
    assert!(!apply_local(&mut s, move_to(1, Placement::After(id(9)))));
    assert!(!apply_local(&mut s, rename(9, "nobody")));
    assert!(!apply_local(&mut s, remove(9)));
    assert_eq!(s, before);
}

// ── reconcile ────────────────────────────────────────────────────

#[test]
fn reconcile_saved_overwrites_local() {
    let mut s = store(&[(1, 1), (2, 2)]);
    let mut remote = label(2, 5);
    remote.favorite = true;

    let applied = reconcile(&mut s, RemoteResult::Saved(remote));
    assert_eq!(applied, Reconciled::Entity(RemoteApplied::Updated));
    assert!(applied.changed_store());
    assert_eq!(layout(s.as_slice()), vec![(1, 1), (2, 5)]);
    assert!(s.get(id(2)).unwrap().favorite);
}

#[test]
fn reconcile_saved_identical_is_unchanged() {
    let mut s = store(&[(1, 1)]);
    let applied = reconcile(&mut s, RemoteResult::Saved(label(1, 1)));
    assert_eq!(applied, Reconciled::Entity(RemoteApplied::Unchanged));
    assert!(!applied.changed_store());
}

#[test]
fn reconcile_deleted() {
    let mut s = store(&[(1, 1), (2, 2)]);
    assert_eq!(
        reconcile(&mut s, RemoteResult::Deleted(id(1))),
        Reconciled::Deleted(1)
    );
    assert_eq!(
        reconcile(&mut s, RemoteResult::Deleted(id(1))),
        Reconciled::Deleted(0)
    );
    assert_eq!(s.ids(), vec![id(2)]);
}

#[test]
fn reconcile_batch_reports_counts() {
    let mut s = store(&[(1, 1), (2, 2)]);
    let batch = vec![label(2, 2), label(3, 3), label(1, 7)];
    let applied = reconcile(&mut s, RemoteResult::Batch(batch));
    assert_eq!(
        applied,
        Reconciled::Batch(SyncReport {
            inserted: 1,
            updated: 1,
            unchanged: 1,
        })
    );
    assert_eq!(layout(s.as_slice()), vec![(2, 2), (3, 3), (1, 7)]);
}
