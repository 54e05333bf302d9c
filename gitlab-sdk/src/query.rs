// ABOUTME: List query options for the GitLab issues endpoints
// ABOUTME: Selects the project or group endpoint and derives query parameters deterministically

use std::fmt;
use typed_builder::TypedBuilder;

use crate::constants::{pagination, query};
use crate::types::IssueKind;

/// Target of an issue listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueScope {
    /// Full path of a project, e.g. `group/project`
    Project(String),
    /// Full path of a group, e.g. `group` or `group/subgroup`
    Group(String),
}

impl IssueScope {
    /// Path segments below the API root. The full path is a single segment,
    /// percent-encoded by the URL builder (`a/b` becomes `a%2Fb`).
    pub fn path_segments(&self) -> [&str; 3] {
        match self {
            IssueScope::Project(path) => ["projects", path, "issues"],
            IssueScope::Group(path) => ["groups", path, "issues"],
        }
    }

    pub fn path(&self) -> &str {
        match self {
            IssueScope::Project(path) | IssueScope::Group(path) => path,
        }
    }

    /// Resource name used in not-found errors.
    pub fn describe(&self) -> String {
        match self {
            IssueScope::Project(path) => format!("Project {path}"),
            IssueScope::Group(path) => format!("Group {path}"),
        }
    }
}

impl fmt::Display for IssueScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The `state` parameter. GitLab defaults to all states when it is omitted,
/// so the client always sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueStateFilter {
    #[default]
    Opened,
    Closed,
    All,
}

impl IssueStateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStateFilter::Opened => "opened",
            IssueStateFilter::Closed => "closed",
            IssueStateFilter::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct ListIssuesOptions {
    pub scope: IssueScope,

    #[builder(default)]
    pub state: IssueStateFilter,

    #[builder(default)]
    pub labels: Vec<String>,

    #[builder(default)]
    pub not_labels: Vec<String>,

    #[builder(default)]
    pub milestone: Option<String>,

    #[builder(default)]
    pub assignee_username: Option<String>,

    #[builder(default)]
    pub not_assignee_username: Option<String>,

    #[builder(default)]
    pub author_username: Option<String>,

    #[builder(default)]
    pub not_author_username: Option<String>,

    #[builder(default)]
    pub search: Option<String>,

    #[builder(default = false)]
    pub confidential: bool,

    #[builder(default)]
    pub iteration_id: Option<u64>,

    #[builder(default)]
    pub issue_type: Option<IssueKind>,

    #[builder(default = pagination::DEFAULT_PAGE)]
    pub page: u32,

    #[builder(default = pagination::DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

impl ListIssuesOptions {
    /// Query parameters in a fixed order. Filters that are not set are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("state", self.state.as_str().to_string()),
            ("in", query::SEARCH_IN.to_string()),
        ];

        if !self.labels.is_empty() {
            pairs.push(("labels", self.labels.join(",")));
        }
        if !self.not_labels.is_empty() {
            pairs.push(("not[labels]", self.not_labels.join(",")));
        }

        let optional = [
            ("milestone", &self.milestone),
            ("assignee_username", &self.assignee_username),
            ("not[assignee_username]", &self.not_assignee_username),
            ("author_username", &self.author_username),
            ("not[author_username]", &self.not_author_username),
            ("search", &self.search),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        }

        if self.confidential {
            pairs.push(("confidential", "true".to_string()));
        }
        if let Some(iteration_id) = self.iteration_id {
            pairs.push(("iteration_id", iteration_id.to_string()));
        }
        if let Some(kind) = self.issue_type {
            pairs.push(("issue_type", kind.as_str().to_string()));
        }

        pairs.push(("page", self.page.to_string()));
        pairs.push(("per_page", self.per_page.to_string()));
        pairs
    }
}
