//! Interactive prompts.
//!
//! The triage and backlog state machines never touch the terminal directly:
//! they ask through the `Prompter` trait, and validated input is built from
//! pure parse functions driven by a re-prompt loop. The parse functions
//! return a rejection reason instead of printing, so they are tested without
//! a terminal.

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::Result;

/// Calendar format accepted for literal dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The three primitive questions the workflows ask.
pub trait Prompter {
    /// Yes/no question, answered explicitly.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// One line of free text; may be empty.
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Pick one entry from a non-empty menu; returns its index.
    fn select(&mut self, title: &str, items: &[String]) -> Result<usize>;
}

/// Prompter backed by the interactive terminal.
///
/// `Select` navigates with the arrow keys, so an out-of-range pick cannot
/// happen here.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).interact()?)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn select(&mut self, title: &str, items: &[String]) -> Result<usize> {
        Ok(Select::new()
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact()?)
    }
}

/// Reply to the progress question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percent {
    Value(u8),
    /// The escape path: the current ratio stays as it is.
    KeepCurrent,
}

/// Parse a progress reply. Blank or `n` keeps the current value; anything
/// else must be an integer percentage.
pub fn parse_percent(raw: &str) -> Result<Percent, String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("n") {
        return Ok(Percent::KeepCurrent);
    }
    match raw.parse::<u8>() {
        Ok(value) if value <= 100 => Ok(Percent::Value(value)),
        _ => Err(format!("'{raw}' is not a percentage between 0 and 100")),
    }
}

/// Parse a cycle count. Blank means one cycle.
pub fn parse_weeks(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    match raw.parse::<u32>() {
        Ok(weeks) if weeks >= 1 => Ok(weeks),
        _ => Err(format!("'{raw}' is not a whole number of weeks (1 or more)")),
    }
}

/// Parse a literal calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format!("'{raw}' is not a date in YYYY-MM-DD form"))
}

/// Ask for a progress percentage until one parses; the escape path returns
/// `current`.
pub fn ask_percent<P: Prompter>(ui: &mut P, current: u8) -> Result<u8> {
    let prompt = format!("Progress (currently {current}%) [0-100, blank keeps it]");
    loop {
        match parse_percent(&ui.line(&prompt)?) {
            Ok(Percent::Value(value)) => return Ok(value),
            Ok(Percent::KeepCurrent) => return Ok(current),
            Err(reason) => println!("{}", reason.yellow()),
        }
    }
}

/// Ask for a cycle count until one parses.
pub fn ask_weeks<P: Prompter>(ui: &mut P) -> Result<u32> {
    loop {
        match parse_weeks(&ui.line("Cycles until due [1]")?) {
            Ok(weeks) => return Ok(weeks),
            Err(reason) => println!("{}", reason.yellow()),
        }
    }
}

/// Ask for a calendar date until one parses.
pub fn ask_date<P: Prompter>(ui: &mut P, prompt: &str) -> Result<NaiveDate> {
    loop {
        match parse_date(&ui.line(prompt)?) {
            Ok(date) => return Ok(date),
            Err(reason) => println!("{}", reason.yellow()),
        }
    }
}

/// Ask for a start/due pair until the due date is not before the start.
pub fn ask_date_range<P: Prompter>(ui: &mut P) -> Result<(NaiveDate, NaiveDate)> {
    loop {
        let start = ask_date(ui, "Start date (YYYY-MM-DD)")?;
        let due = ask_date(ui, "Due date (YYYY-MM-DD)")?;
        if start <= due {
            return Ok((start, due));
        }
        println!("{}", "The due date must not be before the start date".yellow());
    }
}

/// Ask until a non-blank line is given.
pub fn ask_nonempty<P: Prompter>(ui: &mut P, prompt: &str) -> Result<String> {
    loop {
        let text = ui.line(prompt)?;
        let text = text.trim();
        if !text.is_empty() {
            return Ok(text.to_string());
        }
        println!("{}", "A value is required".yellow());
    }
}
