//! Interactive creation of cycle tasks and backlog tasks.
//!
//! Each round collects a subject and a Who/What/Why description, hangs the
//! new task under a topic, and files it with fixed tracker/priority fields.
//! Backlog rounds additionally guess the predecessor by id and offer to
//! record a blocking relation.

use chrono::NaiveDate;
use colored::Colorize;

use crate::models::{priority, status, Category, Issue, NamedRef, NewIssue, Project};
use crate::sprint;
use crate::store::IssueStore;
use crate::ui::prompt::{ask_date_range, ask_nonempty, ask_weeks, Prompter};
use crate::{Context, Result};

/// How dates on the new issues are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Start at the sprint anchor, due a whole number of cycles later.
    /// The task gets an assignee and starts in progress.
    Relative,
    /// Literal calendar dates for work scheduled ahead of time. No assignee;
    /// the task is filed as new.
    Absolute,
}

/// The issue-creation loop. Runs until the user declines another round.
pub struct BacklogSequencer {
    anchor: NaiveDate,
    mode: DateMode,
    task_tracker: u64,
    topic_tracker: u64,
}

impl BacklogSequencer {
    pub fn new(anchor: NaiveDate, mode: DateMode, task_tracker: u64, topic_tracker: u64) -> Self {
        Self {
            anchor,
            mode,
            task_tracker,
            topic_tracker,
        }
    }

    pub fn run<S: IssueStore, P: Prompter>(
        &self,
        project: &Project,
        store: &S,
        ui: &mut P,
    ) -> Result<()> {
        // Menu data is fetched once per run. Both menus are mandatory, so an
        // empty list leaves nothing to do.
        let topics = store
            .open_issues(project.id, Some(self.topic_tracker))
            .context("could not list topic issues")?;
        anyhow::ensure!(
            !topics.is_empty(),
            "project '{}' has no open topics to file tasks under",
            project.name
        );
        let categories = store
            .categories(project.id)
            .context("could not list issue categories")?;
        anyhow::ensure!(
            !categories.is_empty(),
            "project '{}' has no issue categories",
            project.name
        );
        let members: Vec<NamedRef> = if self.mode == DateMode::Relative {
            let members: Vec<NamedRef> = store
                .memberships(project.id)
                .context("could not list project members")?
                .into_iter()
                .filter_map(|m| m.user)
                .collect();
            anyhow::ensure!(
                !members.is_empty(),
                "project '{}' has no members to assign work to",
                project.name
            );
            members
        } else {
            Vec::new()
        };

        loop {
            if let Some(issue) = self.collect_confirmed(project, &topics, &members, &categories, ui)?
            {
                match store.create_issue(&issue) {
                    Ok(id) => {
                        println!(
                            "{}",
                            format!("✅ Created {}", store.issue_url(id)).green()
                        );
                        if self.mode == DateMode::Absolute {
                            self.offer_predecessor(id, project, store, ui)?;
                        }
                    }
                    Err(err) => {
                        eprintln!("{}", format!("⚠️  Creating the issue failed: {err}").red())
                    }
                }
            }
            if !ui.confirm("Add another?")? {
                break;
            }
        }
        Ok(())
    }

    /// Interview for one issue, show the summary, and confirm. Returns
    /// `None` when the user declines the summary.
    fn collect_confirmed<P: Prompter>(
        &self,
        project: &Project,
        topics: &[Issue],
        members: &[NamedRef],
        categories: &[Category],
        ui: &mut P,
    ) -> Result<Option<NewIssue>> {
        let subject = ask_nonempty(ui, "Subject")?;
        let what = ask_nonempty(ui, "What needs doing")?;
        let why = ask_nonempty(ui, "Why it matters")?;

        let (start_date, due_date) = match self.mode {
            DateMode::Relative => sprint::cycle_span(self.anchor, ask_weeks(ui)?),
            DateMode::Absolute => ask_date_range(ui)?,
        };

        let topic_labels: Vec<String> = topics
            .iter()
            .map(|t| format!("#{} {}", t.id, t.subject))
            .collect();
        let topic = &topics[ui.select("Topic", &topic_labels)?];

        let (assigned_to_id, who) = match self.mode {
            DateMode::Relative => {
                let labels: Vec<String> = members.iter().map(|m| m.name.clone()).collect();
                let member = &members[ui.select("Assignee", &labels)?];
                (Some(member.id), member.name.clone())
            }
            DateMode::Absolute => (None, String::new()),
        };

        let category_labels: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
        let category = &categories[ui.select("Category", &category_labels)?];

        let issue = NewIssue {
            project_id: project.id,
            subject,
            description: compose_description(&who, &what, &why),
            tracker_id: self.task_tracker,
            status_id: match self.mode {
                DateMode::Relative => status::IN_PROGRESS,
                DateMode::Absolute => status::NEW,
            },
            priority_id: priority::NORMAL,
            done_ratio: 0,
            start_date,
            due_date,
            parent_issue_id: topic.id,
            category_id: category.id,
            assigned_to_id,
        };

        print_summary(&issue, &topic.subject, &category.name, &who);
        if ui.confirm("Create this issue?")? {
            Ok(Some(issue))
        } else {
            Ok(None)
        }
    }

    /// Best-effort predecessor guess: the store allocates ids monotonically,
    /// so the issue created just before this one usually has id - 1. Any
    /// lookup failure, and any hit outside the project, means no predecessor.
    fn offer_predecessor<S: IssueStore, P: Prompter>(
        &self,
        created: u64,
        project: &Project,
        store: &S,
        ui: &mut P,
    ) -> Result<()> {
        let Some(previous_id) = created.checked_sub(1).filter(|id| *id > 0) else {
            return Ok(());
        };
        let previous = match store.issue(previous_id) {
            Ok(previous) if previous.project.id == project.id => previous,
            Ok(_) | Err(_) => return Ok(()),
        };
        let prompt = format!("Is this blocked by #{} '{}'?", previous.id, previous.subject);
        if ui.confirm(&prompt)? {
            match store.create_relation(previous.id, created) {
                Ok(()) => println!(
                    "{}",
                    format!("🔗 #{} blocks #{}", previous.id, created).cyan()
                ),
                Err(err) => {
                    eprintln!("{}", format!("⚠️  Creating the relation failed: {err}").red())
                }
            }
        }
        Ok(())
    }
}

/// Role-labeled description sections. "Who" stays blank for backlog issues,
/// which have no assignee yet.
pub fn compose_description(who: &str, what: &str, why: &str) -> String {
    format!("Who:\n{who}\n\nWhat:\n{what}\n\nWhy:\n{why}")
}

fn print_summary(issue: &NewIssue, topic: &str, category: &str, who: &str) {
    println!("\n{}", "New issue".bold());
    println!("   Subject:  {}", issue.subject);
    println!("   Topic:    {topic}");
    println!("   Category: {category}");
    if !who.is_empty() {
        println!("   Assignee: {who}");
    }
    println!("   Start:    {}", issue.start_date);
    println!("   Due:      {}", issue.due_date);
    println!("   Description:");
    for line in issue.description.lines() {
        println!("      {line}");
    }
}
