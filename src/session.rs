//! Startup context shared by every command.

use crate::config::Config;
use crate::models::{Project, TRACKER_TASK, TRACKER_TOPIC};
use crate::store::{IssueStore, RedmineClient};
use crate::{Context, Result};

/// Everything a command needs, resolved once at startup and passed by
/// reference: the store client, the configured project, and the ids of the
/// two tracker classifications this tool cares about.
pub struct Session {
    pub config: Config,
    pub store: RedmineClient,
    pub project: Project,
    pub task_tracker: u64,
    pub topic_tracker: u64,
}

impl Session {
    /// Read the environment and resolve the project. Any failure here is
    /// fatal: without a project there is nothing to triage or populate.
    pub fn bootstrap() -> Result<Self> {
        let config = Config::from_env()?;
        let store = RedmineClient::new(&config.base_url, &config.api_key);
        let project = store
            .project(&config.project)
            .with_context(|| format!("could not resolve project '{}'", config.project))?;
        let task_tracker = project.tracker_id(TRACKER_TASK).with_context(|| {
            format!("project '{}' has no '{TRACKER_TASK}' tracker", project.name)
        })?;
        let topic_tracker = project.tracker_id(TRACKER_TOPIC).with_context(|| {
            format!("project '{}' has no '{TRACKER_TOPIC}' tracker", project.name)
        })?;
        Ok(Self {
            config,
            store,
            project,
            task_tracker,
            topic_tracker,
        })
    }
}
