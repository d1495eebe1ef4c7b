use reqwest::blocking::{Client, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::error::{StoreError, StoreResult};
use super::IssueStore;
use crate::models::{Category, IdRef, Issue, IssueUpdate, Membership, NewIssue, Project};

const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Page size requested from the issue filter. The store caps responses at
/// this size; anything beyond it is out of scope here.
const PAGE_LIMIT: &str = "100";

/// Synchronous client for the Redmine REST API.
///
/// Every call blocks until the store answers; there is no background work
/// and no retry.
pub struct RedmineClient {
    http: Client,
    base_url: String,
    api_key: String,
}

// The REST API wraps every payload in a single-key envelope.
#[derive(Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

#[derive(Deserialize)]
struct IssueEnvelope {
    issue: Issue,
}

#[derive(Deserialize)]
struct IssuesEnvelope {
    issues: Vec<Issue>,
}

#[derive(Deserialize)]
struct CreatedEnvelope {
    issue: IdRef,
}

#[derive(Deserialize)]
struct MembershipsEnvelope {
    memberships: Vec<Membership>,
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    issue_categories: Vec<Category>,
}

impl RedmineClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(what: &str, response: Response) -> StoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Status {
                what: what.to_string(),
                status: status.as_u16(),
            })
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> StoreResult<T> {
        let what = format!("GET {path}");
        let response = self
            .http
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()?;
        Self::check(&what, response)?
            .json()
            .map_err(|source| StoreError::Decode { what, source })
    }

    fn send_json(&self, method: Method, path: &str, body: serde_json::Value) -> StoreResult<Response> {
        let what = format!("{method} {path}");
        let response = self
            .http
            .request(method, self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()?;
        Self::check(&what, response)
    }
}

impl IssueStore for RedmineClient {
    fn project(&self, identifier: &str) -> StoreResult<Project> {
        let path = format!("/projects/{identifier}.json");
        let query = [("include", "trackers".to_string())];
        self.get_json::<ProjectEnvelope>(&path, &query)
            .map(|envelope| envelope.project)
    }

    fn open_issues(&self, project_id: u64, tracker_id: Option<u64>) -> StoreResult<Vec<Issue>> {
        let mut query = vec![
            ("project_id", project_id.to_string()),
            ("status_id", "open".to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if let Some(tracker) = tracker_id {
            query.push(("tracker_id", tracker.to_string()));
        }
        self.get_json::<IssuesEnvelope>("/issues.json", &query)
            .map(|envelope| envelope.issues)
    }

    fn issue(&self, id: u64) -> StoreResult<Issue> {
        let path = format!("/issues/{id}.json");
        match self.get_json::<IssueEnvelope>(&path, &[]) {
            Ok(envelope) => Ok(envelope.issue),
            Err(StoreError::Status { status: 404, .. }) => Err(StoreError::NotFound(id)),
            Err(other) => Err(other),
        }
    }

    fn update_issue(&self, id: u64, update: &IssueUpdate) -> StoreResult<()> {
        let path = format!("/issues/{id}.json");
        self.send_json(Method::PUT, &path, json!({ "issue": update }))
            .map(|_| ())
    }

    fn create_issue(&self, issue: &NewIssue) -> StoreResult<u64> {
        let response = self.send_json(Method::POST, "/issues.json", json!({ "issue": issue }))?;
        response
            .json::<CreatedEnvelope>()
            .map(|envelope| envelope.issue.id)
            .map_err(|source| StoreError::Decode {
                what: "POST /issues.json".to_string(),
                source,
            })
    }

    fn create_relation(&self, blocker: u64, blocked: u64) -> StoreResult<()> {
        let path = format!("/issues/{blocker}/relations.json");
        let body = json!({
            "relation": { "issue_to_id": blocked, "relation_type": "blocks" }
        });
        self.send_json(Method::POST, &path, body).map(|_| ())
    }

    fn memberships(&self, project_id: u64) -> StoreResult<Vec<Membership>> {
        let path = format!("/projects/{project_id}/memberships.json");
        self.get_json::<MembershipsEnvelope>(&path, &[])
            .map(|envelope| envelope.memberships)
    }

    fn categories(&self, project_id: u64) -> StoreResult<Vec<Category>> {
        let path = format!("/projects/{project_id}/issue_categories.json");
        self.get_json::<CategoriesEnvelope>(&path, &[])
            .map(|envelope| envelope.issue_categories)
    }

    fn issue_url(&self, id: u64) -> String {
        format!("{}/issues/{}", self.base_url, id)
    }
}
