//! Weekly triage over each assignee's open issues.
//!
//! Issues are grouped by assignee, the groups are walked in the configured
//! order, and every issue gets the same short interview: completed? if not,
//! how far along, and does it move to the next cycle. A failed update is
//! reported and the session moves on; nothing is retried.

use chrono::NaiveDate;
use colored::Colorize;

use crate::models::{Issue, IssueUpdate};
use crate::sprint;
use crate::store::{IssueStore, StoreError};
use crate::ui::prompt::{ask_percent, Prompter};
use crate::ui::Table;
use crate::Result;

/// One interactive pass over the open issues.
pub struct TriageSession {
    anchor: NaiveDate,
    collect_notes: bool,
}

impl TriageSession {
    pub fn new(anchor: NaiveDate, collect_notes: bool) -> Self {
        Self {
            anchor,
            collect_notes,
        }
    }

    /// Walk every assignee group in order. Unassigned issues are dropped
    /// before grouping and are never shown or updated.
    pub fn run<S: IssueStore, P: Prompter>(
        &self,
        issues: Vec<Issue>,
        order: &[String],
        store: &S,
        ui: &mut P,
    ) -> Result<()> {
        let groups = order_groups(group_by_assignee(issues), order);
        for (assignee, group) in groups {
            print_group_table(&assignee, &group);
            for issue in group {
                self.triage_issue(&issue, store, ui)?;
            }
        }
        Ok(())
    }

    fn triage_issue<S: IssueStore, P: Prompter>(
        &self,
        issue: &Issue,
        store: &S,
        ui: &mut P,
    ) -> Result<()> {
        println!("\n{}", format!("#{}: {}", issue.id, issue.subject).bold());

        if ui.confirm("Issue completed?")? {
            let completed = sprint::completed_on(self.anchor);
            match store.update_issue(issue.id, &IssueUpdate::completed(completed)) {
                Ok(()) => println!("{}", format!("✅ Completed on {completed}").green()),
                Err(err) => report_store_failure(issue.id, &err),
            }
        } else {
            let ratio = ask_percent(ui, issue.done_ratio)?;
            if let Err(err) = store.update_issue(issue.id, &IssueUpdate::progress(ratio)) {
                report_store_failure(issue.id, &err);
            }

            match issue.due_date {
                Some(due) => println!("Current due date: {}", due.to_string().bold()),
                None => println!("Current due date: none"),
            }
            if ui.confirm("Move to next cycle?")? {
                let due = sprint::next_cycle_due(self.anchor);
                match store.update_issue(issue.id, &IssueUpdate::due(due)) {
                    Ok(()) => println!("{}", format!("📅 Now due {due}").cyan()),
                    Err(err) => report_store_failure(issue.id, &err),
                }
            }

            // A note failure must not undo the field updates already applied,
            // so it goes out as its own call.
            if self.collect_notes {
                let notes = ui.line("Notes (blank to skip)")?;
                let notes = notes.trim();
                if !notes.is_empty() {
                    if let Err(err) = store.update_issue(issue.id, &IssueUpdate::note(notes)) {
                        report_store_failure(issue.id, &err);
                    }
                }
            }
        }

        println!("Link to issue: {}", store.issue_url(issue.id).underline());
        Ok(())
    }
}

/// Fetch-ordered issues per assignee name. Unassigned issues are dropped.
pub fn group_by_assignee(issues: Vec<Issue>) -> Vec<(String, Vec<Issue>)> {
    let mut groups: Vec<(String, Vec<Issue>)> = Vec::new();
    for issue in issues {
        let Some(assignee) = issue.assigned_to.as_ref().map(|a| a.name.clone()) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == assignee) {
            Some((_, list)) => list.push(issue),
            None => groups.push((assignee, vec![issue])),
        }
    }
    groups
}

/// Listed names sort by their position in `order`; everyone else comes
/// after, keeping discovery order among themselves.
pub fn order_groups(
    mut groups: Vec<(String, Vec<Issue>)>,
    order: &[String],
) -> Vec<(String, Vec<Issue>)> {
    groups.sort_by_key(|(name, _)| {
        order
            .iter()
            .position(|listed| listed == name)
            .unwrap_or(order.len())
    });
    groups
}

fn print_group_table(assignee: &str, issues: &[Issue]) {
    let mut table = Table::new(
        format!("Issues assigned to {assignee}"),
        &["ID", "Subject", "Progress", "Due Date"],
    );
    for issue in issues {
        table.add_row(vec![
            format!("#{}", issue.id),
            issue.subject.clone(),
            format!("{}%", issue.done_ratio),
            issue
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.print();
}

fn report_store_failure(id: u64, err: &StoreError) {
    eprintln!("{}", format!("⚠️  Update to #{id} failed: {err}").red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedRef;

    fn issue(id: u64, assignee: Option<&str>) -> Issue {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "subject": format!("Issue {id}"),
            "project": { "id": 1, "name": "Flight" },
            "tracker": { "id": 4, "name": "Task" },
            "status": { "id": 2, "name": "In Progress" },
            "priority": { "id": 2, "name": "Normal" },
            "assigned_to": assignee.map(|name| serde_json::json!({ "id": 90, "name": name })),
            "done_ratio": 0
        }))
        .unwrap()
    }

    #[test]
    fn test_grouping_drops_unassigned_issues() {
        let groups = group_by_assignee(vec![
            issue(1, Some("Alice")),
            issue(2, None),
            issue(3, Some("Alice")),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Alice");
        let ids: Vec<u64> = groups[0].1.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_grouping_keeps_fetch_order_within_a_group() {
        let groups = group_by_assignee(vec![
            issue(5, Some("Bob")),
            issue(2, Some("Bob")),
            issue(9, Some("Bob")),
        ]);
        let ids: Vec<u64> = groups[0].1.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_listed_names_come_first_unlisted_keep_discovery_order() {
        let order = vec!["Alice".to_string(), "Bob".to_string()];
        let groups = order_groups(
            group_by_assignee(vec![
                issue(1, Some("Carol")),
                issue(2, Some("Alice")),
                issue(3, Some("Dave")),
            ]),
            &order,
        );
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Dave"]);
    }

    #[test]
    fn test_empty_order_list_keeps_discovery_order() {
        let groups = order_groups(
            group_by_assignee(vec![issue(1, Some("Carol")), issue(2, Some("Alice"))]),
            &[],
        );
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice"]);
    }

    #[test]
    fn test_assignees_are_matched_by_name() {
        // Two refs with different ids but the same display name land in one
        // group, matching how the store reports assignees.
        let mut a = issue(1, Some("Alice"));
        a.assigned_to = Some(NamedRef {
            id: 7,
            name: "Alice".to_string(),
        });
        let groups = group_by_assignee(vec![a, issue(2, Some("Alice"))]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1.len(), 2);
    }
}
