use serde::Deserialize;

use super::NamedRef;

/// Tracker name marking actionable work.
pub const TRACKER_TASK: &str = "Task";

/// Tracker name marking organizational parent issues.
pub const TRACKER_TOPIC: &str = "Topic";

/// A project as returned by the store, with its trackers included.
/// Read-only to this tool.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub trackers: Vec<NamedRef>,
}

impl Project {
    /// Resolve a tracker id by its display name.
    pub fn tracker_id(&self, name: &str) -> Option<u64> {
        self.trackers.iter().find(|t| t.name == name).map(|t| t.id)
    }
}

/// One project membership row. Group memberships carry no user and are
/// skipped when building the assignee menu.
#[derive(Debug, Clone, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub user: Option<NamedRef>,
}

/// An issue category defined on the project.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
