// ABOUTME: Wire types for GitLab issue listing responses
// ABOUTME: Typed fields for rendering, with every other attribute preserved verbatim

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Attributes returned by the API that the client does not interpret.
///
/// Kept so that re-serialising an entity reproduces the API's own payload.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Opened,
    Closed,
    Locked,
}

impl IssueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Opened => "opened",
            IssueState::Closed => "closed",
            IssueState::Locked => "locked",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `issue_type` discriminator of an issuable, as far as listing filters go.
///
/// Instances can report other types (`requirement`, `ticket`, ...); those are
/// left uninterpreted in [`Issue::extra`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Issue,
    Incident,
    TestCase,
    Task,
}

impl IssueKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "issue" => Some(IssueKind::Issue),
            "incident" => Some(IssueKind::Incident),
            "test_case" => Some(IssueKind::TestCase),
            "task" => Some(IssueKind::Task),
            _ => None,
        }
    }

    /// Value used for the `issue_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::Incident => "incident",
            IssueKind::TestCase => "test_case",
            IssueKind::Task => "task",
        }
    }

    /// Human-readable singular noun.
    pub fn noun(&self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::Incident => "incident",
            IssueKind::TestCase => "test case",
            IssueKind::Task => "task",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API timestamp that serialises back to the exact text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    parsed: DateTime<Utc>,
}

impl Timestamp {
    pub fn parsed(&self) -> DateTime<Utc> {
        self.parsed
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let parsed = raw
            .parse::<DateTime<Utc>>()
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))?;
        Ok(Self { raw, parsed })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReferences {
    pub short: String,
    pub relative: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub iid: u64,
    pub title: String,
    pub state: IssueState,
    pub labels: Vec<String>,
    pub author: User,
    pub created_at: Timestamp,
    pub web_url: String,
    pub references: IssueReferences,
    /// Everything else, `issue_type` included, exactly as the API sent it.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Opened
    }

    /// The `issue_type` attribute, if present and one this client filters on.
    pub fn kind(&self) -> Option<IssueKind> {
        self.extra
            .get("issue_type")
            .and_then(|value| value.as_str())
            .and_then(IssueKind::parse)
    }
}

/// One page of a paginated listing.
///
/// GitLab list endpoints are offset paginated; the client never asks for a
/// total count, so whether another page exists is inferred from a full page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32) -> Self {
        Self {
            items,
            page,
            per_page,
        }
    }

    pub fn has_more(&self) -> bool {
        self.per_page > 0 && self.items.len() >= self.per_page as usize
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}
