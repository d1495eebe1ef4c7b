use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stock status enumeration ids used by the tracker.
pub mod status {
    pub const NEW: u64 = 1;
    pub const IN_PROGRESS: u64 = 2;
    pub const CLOSED: u64 = 5;
}

/// Stock priority enumeration ids used by the tracker.
pub mod priority {
    pub const NORMAL: u64 = 2;
}

/// Reference to another tracker entity, carried as id plus display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

/// Bare id reference (parent issue, created-issue response).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: u64,
}

/// An issue as returned by the remote store.
///
/// Fields the tracker may omit are explicit `Option`s; nothing here is
/// discovered by probing at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project: NamedRef,
    pub tracker: NamedRef,
    pub status: NamedRef,
    pub priority: NamedRef,
    #[serde(default)]
    pub assigned_to: Option<NamedRef>,
    #[serde(default)]
    pub category: Option<NamedRef>,
    #[serde(default)]
    pub parent: Option<IdRef>,
    pub done_ratio: u8,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Partial field set sent with an issue update. Unset fields are left
/// untouched by the store.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_ratio: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl IssueUpdate {
    /// Close the issue: full progress, closed status, completion recorded as
    /// the given date.
    pub fn completed(on: NaiveDate) -> Self {
        Self {
            status_id: Some(status::CLOSED),
            done_ratio: Some(100),
            due_date: Some(on),
            ..Self::default()
        }
    }

    /// Record progress without touching the status.
    pub fn progress(done_ratio: u8) -> Self {
        Self {
            done_ratio: Some(done_ratio),
            ..Self::default()
        }
    }

    /// Move the due date.
    pub fn due(date: NaiveDate) -> Self {
        Self {
            due_date: Some(date),
            ..Self::default()
        }
    }

    /// Attach a journal note.
    pub fn note(text: impl Into<String>) -> Self {
        Self {
            notes: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Full field set for a newly created issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub project_id: u64,
    pub subject: String,
    pub description: String,
    pub tracker_id: u64,
    pub status_id: u64,
    pub priority_id: u64,
    pub done_ratio: u8,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub parent_issue_id: u64,
    pub category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u64>,
}
