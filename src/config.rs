use std::env;

use crate::{Context, Result};

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the tracker, without a trailing slash.
    pub base_url: String,
    pub api_key: String,
    /// Identifier of the project everything operates on.
    pub project: String,
    /// Preferred triage order of assignee names; assignees not listed here
    /// are visited after the listed ones.
    pub triage_order: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: require("REDMINE_URL")?.trim_end_matches('/').to_string(),
            api_key: require("REDMINE_API_KEY")?,
            project: require("REDMINE_PROJECT")?,
            triage_order: parse_order(&env::var("TRIAGE_ORDER").unwrap_or_default()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} is not set"))
}

/// Split a comma-separated name list, dropping blanks.
fn parse_order(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
