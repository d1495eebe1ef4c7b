pub mod issue;
pub mod project;

pub use issue::{priority, status, IdRef, Issue, IssueUpdate, NamedRef, NewIssue};
pub use project::{Category, Membership, Project, TRACKER_TASK, TRACKER_TOPIC};
