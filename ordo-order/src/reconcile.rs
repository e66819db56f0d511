//! Folding remote snapshots into a local collection.
//!
//! Remote is authoritative: a known id has every persisted field overwritten,
//! an unknown id is inserted verbatim, and ids missing from a batch are left
//! alone. Deletion only ever happens through an explicit delete signal.
//!
//! Because every field is overwritten rather than accumulated, applying the
//! same batch twice yields the same collection as applying it once.

use crate::{Ordered, OrderedStore};
use ordo_types::EntityId;
use tracing::debug;

/// What a single remote entity did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteApplied {
    /// The id was unknown and has been inserted.
    Inserted,
    /// The id was known and at least one field changed.
    Updated,
    /// The id was known and the remote copy matched the local one.
    Unchanged,
}

/// Counts from one [`OrderedStore::sync`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl SyncReport {
    /// Whether the sync changed anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.updated == 0
    }

    /// Total number of remote entities processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.unchanged
    }

    fn record(&mut self, applied: RemoteApplied) {
        match applied {
            RemoteApplied::Inserted => self.inserted += 1,
            RemoteApplied::Updated => self.updated += 1,
            RemoteApplied::Unchanged => self.unchanged += 1,
        }
    }
}

impl<E: Ordered> OrderedStore<E> {
    /// Merges a batch of remote snapshots, sorting once at the end.
    pub fn sync(&mut self, batch: impl IntoIterator<Item = E>) -> SyncReport {
        let mut report = SyncReport::default();
        for remote in batch {
            report.record(self.absorb_one(remote));
        }
        if !report.is_noop() {
            self.resort();
        }
        debug!(
            "sync: {} inserted, {} updated, {} unchanged",
            report.inserted, report.updated, report.unchanged
        );
        report
    }

    /// Applies one authoritative entity, e.g. the response to a create or
    /// update request.
    pub fn apply_remote(&mut self, remote: E) -> RemoteApplied {
        let applied = self.absorb_one(remote);
        if applied != RemoteApplied::Unchanged {
            self.resort();
        }
        applied
    }

    /// Applies an explicit remote delete.
    ///
    /// The remote store deletes a parent together with its descendants, so
    /// the local copy does the same. Returns what was removed, parent first.
    pub fn apply_remote_delete(&mut self, id: EntityId) -> Vec<E> {
        self.remove_cascade(id)
    }

    /// Overwrites or appends without re-sorting. Positions recorded in the
    /// index stay valid because entities are only ever pushed to the end.
    fn absorb_one(&mut self, remote: E) -> RemoteApplied {
        let id = remote.id();
        match self.index.get(id) {
            Some(pos) => {
                let local = &mut self.entities[pos];
                let before = local.clone();
                local.absorb(&remote);
                if *local == before {
                    RemoteApplied::Unchanged
                } else {
                    RemoteApplied::Updated
                }
            }
            None => {
                self.index.insert(id, self.entities.len());
                self.entities.push(remote);
                RemoteApplied::Inserted
            }
        }
    }
}
