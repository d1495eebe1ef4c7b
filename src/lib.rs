// Roundup - weekly issue triage for a Redmine-backed team
// Walks each assignee's open tickets on a Tuesday-anchored cadence and files
// upcoming work with inferred ordering.

pub mod backlog;
pub mod cli;
pub mod config;
pub mod models;
pub mod session;
pub mod sprint;
pub mod store;
pub mod triage;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use backlog::{BacklogSequencer, DateMode};
pub use config::Config;
pub use session::Session;
pub use store::{IssueStore, RedmineClient, StoreError};
pub use triage::TriageSession;
