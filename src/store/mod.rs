//! Remote issue store.
//!
//! The tracker is the system of record; this tool only reads and writes
//! through it. `IssueStore` is the seam between the workflow logic and the
//! wire so the triage and backlog state machines can run against a test
//! double.

pub mod client;
pub mod error;

pub use client::RedmineClient;
pub use error::{StoreError, StoreResult};

use crate::models::{Category, Issue, IssueUpdate, Membership, NewIssue, Project};

/// The remote operations this tool consumes, one method per endpoint.
pub trait IssueStore {
    /// Resolve a project by its identifier, trackers included.
    fn project(&self, identifier: &str) -> StoreResult<Project>;

    /// All open issues of a project, optionally narrowed to one tracker,
    /// in the store's fetch order.
    fn open_issues(&self, project_id: u64, tracker_id: Option<u64>) -> StoreResult<Vec<Issue>>;

    /// Fetch a single issue by id.
    fn issue(&self, id: u64) -> StoreResult<Issue>;

    /// Apply a partial update to an issue.
    fn update_issue(&self, id: u64, update: &IssueUpdate) -> StoreResult<()>;

    /// Create an issue and return its store-assigned id.
    fn create_issue(&self, issue: &NewIssue) -> StoreResult<u64>;

    /// Record that `blocker` blocks `blocked`.
    fn create_relation(&self, blocker: u64, blocked: u64) -> StoreResult<()>;

    /// People and groups with a role on the project.
    fn memberships(&self, project_id: u64) -> StoreResult<Vec<Membership>>;

    /// Issue categories defined on the project.
    fn categories(&self, project_id: u64) -> StoreResult<Vec<Category>>;

    /// Browser link to an issue. No request is made.
    fn issue_url(&self, id: u64) -> String;
}
