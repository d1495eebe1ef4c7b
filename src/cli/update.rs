use colored::Colorize;

use crate::session::Session;
use crate::sprint;
use crate::store::IssueStore;
use crate::triage::TriageSession;
use crate::ui::ConsolePrompter;
use crate::{Context, Result};

/// Run the weekly triage over every assignee's open issues.
pub fn run(collect_notes: bool) -> Result<()> {
    let session = Session::bootstrap()?;
    let issues = session
        .store
        .open_issues(session.project.id, None)
        .context("could not list open issues")?;
    if issues.is_empty() {
        println!("{}", "No open issues to triage.".green());
        return Ok(());
    }

    let anchor = sprint::week_anchor(chrono::Local::now().date_naive());
    TriageSession::new(anchor, collect_notes).run(
        issues,
        &session.config.triage_order,
        &session.store,
        &mut ConsolePrompter,
    )
}
