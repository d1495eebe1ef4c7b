//! Test doubles shared by the workflow tests: a scripted prompter and an
//! in-memory issue store that records every mutation.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::NaiveDate;
use serde_json::json;

use roundup::models::{Category, Issue, IssueUpdate, Membership, NamedRef, NewIssue, Project};
use roundup::store::{IssueStore, StoreError, StoreResult};
use roundup::ui::Prompter;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One canned reply, consumed in order.
#[derive(Debug, Clone)]
pub enum Reply {
    Yes,
    No,
    Line(&'static str),
    Pick(usize),
}

/// Prompter that answers from a fixed script and panics on any question the
/// script did not anticipate.
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: replies.into(),
        }
    }

    /// Every scripted reply must have been consumed by the end of a test;
    /// leftovers mean a prompt the flow was expected to ask never happened.
    pub fn assert_exhausted(&self) {
        assert!(
            self.replies.is_empty(),
            "unused replies: {:?}",
            self.replies
        );
    }

    fn next(&mut self, prompt: &str) -> Reply {
        self.replies
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted at prompt '{prompt}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str) -> roundup::Result<bool> {
        match self.next(prompt) {
            Reply::Yes => Ok(true),
            Reply::No => Ok(false),
            other => panic!("expected Yes/No for '{prompt}', script gave {other:?}"),
        }
    }

    fn line(&mut self, prompt: &str) -> roundup::Result<String> {
        match self.next(prompt) {
            Reply::Line(text) => Ok(text.to_string()),
            other => panic!("expected a line for '{prompt}', script gave {other:?}"),
        }
    }

    fn select(&mut self, title: &str, items: &[String]) -> roundup::Result<usize> {
        match self.next(title) {
            Reply::Pick(index) => {
                assert!(index < items.len(), "pick {index} outside menu '{title}'");
                Ok(index)
            }
            other => panic!("expected a pick for '{title}', script gave {other:?}"),
        }
    }
}

/// In-memory store double. Serves canned data and records every mutation;
/// failures are injected per issue id or per call kind.
pub struct MemoryStore {
    pub project: Project,
    pub issues: Vec<Issue>,
    pub members: Vec<Membership>,
    pub categories: Vec<Category>,
    next_id: Cell<u64>,
    pub fail_issue_ids: Vec<u64>,
    pub fail_note_updates: bool,
    pub fail_creates: bool,
    pub updates: RefCell<Vec<(u64, IssueUpdate)>>,
    pub creates: RefCell<Vec<NewIssue>>,
    pub relations: RefCell<Vec<(u64, u64)>>,
}

impl MemoryStore {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            issues: Vec::new(),
            members: Vec::new(),
            categories: Vec::new(),
            next_id: Cell::new(101),
            fail_issue_ids: Vec::new(),
            fail_note_updates: false,
            fail_creates: false,
            updates: RefCell::new(Vec::new()),
            creates: RefCell::new(Vec::new()),
            relations: RefCell::new(Vec::new()),
        }
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_members(mut self, members: &[(u64, &str)]) -> Self {
        self.members = members
            .iter()
            .map(|(id, name)| Membership {
                user: Some(NamedRef {
                    id: *id,
                    name: name.to_string(),
                }),
            })
            .collect();
        self
    }

    pub fn with_categories(mut self, categories: &[(u64, &str)]) -> Self {
        self.categories = categories
            .iter()
            .map(|(id, name)| Category {
                id: *id,
                name: name.to_string(),
            })
            .collect();
        self
    }

    /// Id the next created issue will get.
    pub fn with_next_id(self, id: u64) -> Self {
        self.next_id.set(id);
        self
    }
}

impl IssueStore for MemoryStore {
    fn project(&self, _identifier: &str) -> StoreResult<Project> {
        Ok(self.project.clone())
    }

    fn open_issues(&self, project_id: u64, tracker_id: Option<u64>) -> StoreResult<Vec<Issue>> {
        Ok(self
            .issues
            .iter()
            .filter(|i| i.project.id == project_id)
            .filter(|i| tracker_id.map_or(true, |t| i.tracker.id == t))
            .cloned()
            .collect())
    }

    fn issue(&self, id: u64) -> StoreResult<Issue> {
        self.issues
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update_issue(&self, id: u64, update: &IssueUpdate) -> StoreResult<()> {
        if self.fail_issue_ids.contains(&id) || (self.fail_note_updates && update.notes.is_some())
        {
            return Err(StoreError::Status {
                what: format!("PUT /issues/{id}.json"),
                status: 500,
            });
        }
        self.updates.borrow_mut().push((id, update.clone()));
        Ok(())
    }

    fn create_issue(&self, issue: &NewIssue) -> StoreResult<u64> {
        if self.fail_creates {
            return Err(StoreError::Status {
                what: "POST /issues.json".to_string(),
                status: 422,
            });
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.creates.borrow_mut().push(issue.clone());
        Ok(id)
    }

    fn create_relation(&self, blocker: u64, blocked: u64) -> StoreResult<()> {
        self.relations.borrow_mut().push((blocker, blocked));
        Ok(())
    }

    fn memberships(&self, _project_id: u64) -> StoreResult<Vec<Membership>> {
        Ok(self.members.clone())
    }

    fn categories(&self, _project_id: u64) -> StoreResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn issue_url(&self, id: u64) -> String {
        format!("https://tracker.test/issues/{id}")
    }
}

/// Project fixture with the Topic (3) and Task (4) trackers.
pub fn project(id: u64) -> Project {
    serde_json::from_value(json!({
        "id": id,
        "name": "Flight Software",
        "identifier": "flight",
        "trackers": [
            { "id": 3, "name": "Topic" },
            { "id": 4, "name": "Task" }
        ]
    }))
    .unwrap()
}

pub fn task_issue(
    id: u64,
    project_id: u64,
    assignee: Option<(u64, &str)>,
    done_ratio: u8,
    due: Option<&str>,
) -> Issue {
    serde_json::from_value(json!({
        "id": id,
        "subject": format!("Task {id}"),
        "project": { "id": project_id, "name": "Flight Software" },
        "tracker": { "id": 4, "name": "Task" },
        "status": { "id": 2, "name": "In Progress" },
        "priority": { "id": 2, "name": "Normal" },
        "assigned_to": assignee.map(|(id, name)| json!({ "id": id, "name": name })),
        "done_ratio": done_ratio,
        "due_date": due
    }))
    .unwrap()
}

pub fn topic_issue(id: u64, project_id: u64, subject: &str) -> Issue {
    serde_json::from_value(json!({
        "id": id,
        "subject": subject,
        "project": { "id": project_id, "name": "Flight Software" },
        "tracker": { "id": 3, "name": "Topic" },
        "status": { "id": 1, "name": "New" },
        "priority": { "id": 2, "name": "Normal" },
        "done_ratio": 0
    }))
    .unwrap()
}
