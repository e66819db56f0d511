use crate::{EntityKind, Kinded};
use ordo_order::{Hierarchical, Ordered, Patch};
use ordo_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A task. Sub-tasks point at their parent task through `parent_id`.
/// A session keeps every task in one collection; `project_id` says which
/// project a task belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub project_id: EntityId,
    #[serde(default)]
    pub parent_id: Option<EntityId>,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    /// 1 (normal) to 4 (urgent).
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(rename = "generalOrder")]
    pub order: i64,
    pub modified_at: Timestamp,
    #[serde(skip)]
    pub collapsed: bool,
}

fn default_priority() -> u8 {
    1
}

impl Task {
    pub fn new(id: EntityId, project_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            id,
            project_id,
            parent_id: None,
            content: content.into(),
            completed: false,
            priority: default_priority(),
            order: 0,
            modified_at: Timestamp::now(),
            collapsed: false,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }
}

impl Ordered for Task {
    fn id(&self) -> EntityId {
        self.id
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }

    fn modified_at(&self) -> Timestamp {
        self.modified_at
    }

    fn parent_id(&self) -> Option<EntityId> {
        self.parent_id
    }

    fn absorb(&mut self, remote: &Self) {
        let collapsed = self.collapsed;
        *self = remote.clone();
        self.collapsed = collapsed;
    }
}

impl Hierarchical for Task {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

impl Kinded for Task {
    const KIND: EntityKind = EntityKind::Task;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<EntityId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<Timestamp>,
}

impl Patch<Task> for TaskPatch {
    fn apply_to(self, task: &mut Task) {
        if let Some(content) = self.content {
            task.content = content;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(parent_id) = self.parent_id {
            task.parent_id = parent_id;
        }
        if let Some(modified_at) = self.modified_at {
            task.modified_at = modified_at;
        }
    }
}
