//! Outstanding request tracking.
//!
//! A response may arrive after the user has already edited the same entity
//! again. The response still overwrites local fields (last response
//! processed wins); this module only makes that case visible so callers
//! can log or surface it.

use ordo_types::{EntityId, RequestId};
use std::collections::HashMap;

/// Requests issued to the remote store that have not been answered yet.
#[derive(Debug, Clone, Default)]
pub struct PendingRequests {
    /// Per-entity requests as (issue sequence, id), in issue order.
    by_entity: HashMap<EntityId, Vec<(u64, RequestId)>>,
    /// Reverse lookup: request → (subject, issue sequence).
    subject_of: HashMap<RequestId, (EntityId, u64)>,
    next_seq: u64,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new request about `subject` and returns its id.
    pub fn register(&mut self, subject: EntityId) -> RequestId {
        let request = RequestId::new();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_entity.entry(subject).or_default().push((seq, request));
        self.subject_of.insert(request, (subject, seq));
        request
    }

    /// Marks `request` as answered (or abandoned). Returns its subject.
    pub fn complete(&mut self, request: RequestId) -> Option<EntityId> {
        let (subject, _) = self.subject_of.remove(&request)?;
        if let Some(list) = self.by_entity.get_mut(&subject) {
            list.retain(|(_, r)| *r != request);
            if list.is_empty() {
                self.by_entity.remove(&subject);
            }
        }
        Some(subject)
    }

    /// Whether a request about the same entity was issued after `request`
    /// and is still outstanding.
    pub fn has_newer(&self, request: RequestId) -> bool {
        let Some((subject, seq)) = self.subject_of.get(&request) else {
            return false;
        };
        self.by_entity
            .get(subject)
            .is_some_and(|list| list.iter().any(|(s, _)| s > seq))
    }

    /// Number of outstanding requests about `subject`.
    pub fn outstanding(&self, subject: EntityId) -> usize {
        self.by_entity.get(&subject).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.subject_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject_of.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_entity.clear();
        self.subject_of.clear();
    }
}
