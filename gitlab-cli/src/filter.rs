// ABOUTME: Validated filter specification for the issue and incident list commands
// ABOUTME: Checks flag combinations and ranges locally before any request is made

use gitlab_sdk::{IssueKind, IssueScope};
use thiserror::Error;

use crate::constants::limits;
use crate::types::{ListVariant, OutputArg, OutputFormatArg, OutputMode, StateFilter};

/// Problems detected while building a [`FilterSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "if any flags in the group [{}] are set none of the others can be; [{}] were all set",
        .group.join(" "),
        .set.join(" ")
    )]
    MutuallyExclusiveFlags {
        group: Vec<&'static str>,
        set: Vec<&'static str>,
    },

    #[error("unknown flag: --{flag}")]
    UnsupportedFlag { flag: &'static str },

    #[error("invalid value for --{flag}: {reason}")]
    InvalidValue { flag: &'static str, reason: String },

    #[error("could not determine the project: {0}")]
    Repository(String),
}

/// List arguments exactly as the user supplied them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawListArgs {
    pub variant: ListVariant,
    pub opened: bool,
    pub closed: bool,
    pub all: bool,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub confidential: bool,
    pub assignee: Option<String>,
    pub not_assignee: Option<String>,
    pub author: Option<String>,
    pub not_author: Option<String>,
    pub labels: Vec<String>,
    pub not_labels: Vec<String>,
    pub milestone: Option<String>,
    pub iteration: Option<u64>,
    pub search: Option<String>,
    pub mine: bool,
    pub issue_type: Option<IssueKind>,
    pub group: Option<String>,
    pub output: Option<OutputArg>,
    pub output_format: Option<OutputFormatArg>,
}

/// The complete, validated query intent of one list invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub variant: ListVariant,
    pub scope: IssueScope,
    pub state: StateFilter,
    pub labels: Vec<String>,
    pub not_labels: Vec<String>,
    pub assignee: Option<String>,
    pub not_assignee: Option<String>,
    pub author: Option<String>,
    pub not_author: Option<String>,
    pub milestone: Option<String>,
    pub search: Option<String>,
    pub confidential: bool,
    pub issue_kind: Option<IssueKind>,
    pub mine: bool,
    pub iteration_id: Option<u64>,
    pub page: u32,
    pub per_page: u32,
    pub output: OutputMode,
}

impl FilterSpec {
    /// Validates `raw` and resolves the listing scope.
    ///
    /// `resolve_project` is only called when no group was given. Every flag
    /// check runs first, so an invalid combination never touches git or the
    /// network.
    pub fn build<F>(raw: RawListArgs, resolve_project: F) -> Result<Self, ValidationError>
    where
        F: FnOnce() -> anyhow::Result<String>,
    {
        exclusive(
            &["output", "output-format"],
            &[raw.output.is_some(), raw.output_format.is_some()],
        )?;
        exclusive(
            &["opened", "closed", "all"],
            &[raw.opened, raw.closed, raw.all],
        )?;
        exclusive(
            &["assignee", "mine"],
            &[raw.assignee.is_some(), raw.mine],
        )?;

        if raw.issue_type.is_some() && !raw.variant.supports_kind_restriction() {
            return Err(ValidationError::UnsupportedFlag { flag: "issue-type" });
        }

        let page = raw.page.unwrap_or(limits::DEFAULT_PAGE);
        if page < 1 {
            return Err(ValidationError::InvalidValue {
                flag: "page",
                reason: "must be at least 1".to_string(),
            });
        }

        let per_page = raw.per_page.unwrap_or(limits::DEFAULT_PER_PAGE);
        if !(1..=limits::MAX_PER_PAGE).contains(&per_page) {
            return Err(ValidationError::InvalidValue {
                flag: "per-page",
                reason: format!("must be between 1 and {}", limits::MAX_PER_PAGE),
            });
        }

        let scope = match raw.group {
            Some(group) if group.trim().is_empty() => {
                return Err(ValidationError::InvalidValue {
                    flag: "group",
                    reason: "must not be empty".to_string(),
                });
            }
            Some(group) => IssueScope::Group(group),
            None => {
                let path =
                    resolve_project().map_err(|e| ValidationError::Repository(format!("{e:#}")))?;
                IssueScope::Project(path)
            }
        };

        let state = if raw.closed {
            StateFilter::Closed
        } else if raw.all {
            StateFilter::All
        } else {
            StateFilter::Opened
        };

        Ok(Self {
            variant: raw.variant,
            scope,
            state,
            labels: raw.labels,
            not_labels: raw.not_labels,
            assignee: raw.assignee,
            not_assignee: raw.not_assignee,
            author: raw.author,
            not_author: raw.not_author,
            milestone: raw.milestone,
            search: raw.search,
            confidential: raw.confidential,
            issue_kind: raw.issue_type,
            mine: raw.mine,
            iteration_id: raw.iteration,
            page,
            per_page,
            output: OutputMode::from_args(raw.output, raw.output_format),
        })
    }

    /// The kind every listed item is restricted to, if any.
    pub fn effective_kind(&self) -> Option<IssueKind> {
        self.variant.implied_kind().or(self.issue_kind)
    }

    /// Singular noun for headers and messages.
    pub fn noun(&self) -> &'static str {
        self.effective_kind()
            .map(|kind| kind.noun())
            .unwrap_or_else(|| self.variant.default_noun())
    }
}

fn exclusive(group: &[&'static str], set: &[bool]) -> Result<(), ValidationError> {
    let mut names: Vec<&'static str> = group
        .iter()
        .zip(set)
        .filter(|(_, is_set)| **is_set)
        .map(|(name, _)| *name)
        .collect();

    if names.len() > 1 {
        names.sort_unstable();
        return Err(ValidationError::MutuallyExclusiveFlags {
            group: group.to_vec(),
            set: names,
        });
    }
    Ok(())
}
