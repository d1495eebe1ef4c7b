use crate::backlog::{BacklogSequencer, DateMode};
use crate::session::Session;
use crate::sprint;
use crate::ui::ConsolePrompter;
use crate::Result;

/// Create tasks for the cycle starting at the sprint anchor.
pub fn run() -> Result<()> {
    let session = Session::bootstrap()?;
    let anchor = sprint::week_anchor(chrono::Local::now().date_naive());
    BacklogSequencer::new(
        anchor,
        DateMode::Relative,
        session.task_tracker,
        session.topic_tracker,
    )
    .run(&session.project, &session.store, &mut ConsolePrompter)
}
