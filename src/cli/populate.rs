use crate::backlog::{BacklogSequencer, DateMode};
use crate::session::Session;
use crate::sprint;
use crate::ui::ConsolePrompter;
use crate::Result;

/// Populate the backlog with dated tasks and inferred blocking order.
pub fn run() -> Result<()> {
    let session = Session::bootstrap()?;
    let anchor = sprint::week_anchor(chrono::Local::now().date_naive());
    BacklogSequencer::new(
        anchor,
        DateMode::Absolute,
        session.task_tracker,
        session.topic_tracker,
    )
    .run(&session.project, &session.store, &mut ConsolePrompter)
}
