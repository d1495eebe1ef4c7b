//! Tuesday-anchored cycle dates.
//!
//! The team's working week runs Tuesday to Monday. Every date this tool
//! writes to the tracker is derived from the anchor of the current cycle,
//! so triage on any weekday lands on the same set of dates.

use chrono::{Datelike, Duration, NaiveDate};

/// Canonical start of the cycle containing `today`.
///
/// Tuesday is its own anchor. Monday rolls forward into the cycle starting
/// tomorrow; Wednesday through Sunday resolve backward to the Tuesday of the
/// cycle already in progress. The result is always a Tuesday in the range
/// `[today - 5, today + 1]`.
pub fn week_anchor(today: NaiveDate) -> NaiveDate {
    // num_days_from_monday: Monday = 0, Tuesday = 1, ... Sunday = 6.
    let days_from_tuesday = 1 - i64::from(today.weekday().num_days_from_monday());
    today + Duration::days(days_from_tuesday)
}

/// Completion date recorded when an issue is closed during triage: the
/// Monday that ended the previous cycle.
pub fn completed_on(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(1)
}

/// Due date for work pushed into the next cycle: the Monday closing the
/// current one.
pub fn next_cycle_due(anchor: NaiveDate) -> NaiveDate {
    anchor + Duration::days(6)
}

/// Start and due dates for a task spanning `weeks` whole cycles from the
/// anchor. One week is due the Monday after the anchor, two weeks the Monday
/// after that.
pub fn cycle_span(anchor: NaiveDate, weeks: u32) -> (NaiveDate, NaiveDate) {
    let due = anchor + Duration::days(i64::from(weeks) * 7 - 1);
    (anchor, due)
}
