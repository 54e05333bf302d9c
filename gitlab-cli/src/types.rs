// ABOUTME: Type definitions and enums for the GitLab CLI
// ABOUTME: Provides the listing variants, state filters, and output modes shared by the pipeline

use clap::ValueEnum;
use gitlab_sdk::{IssueKind, IssueStateFilter};
use std::fmt;

/// Which listing command is running.
///
/// Incidents are issues narrowed to one kind, so the incident listing cannot
/// take a further kind restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListVariant {
    #[default]
    Issues,
    Incidents,
}

impl ListVariant {
    /// Kind sent with every request of this variant, if any.
    pub fn implied_kind(&self) -> Option<IssueKind> {
        match self {
            ListVariant::Issues => None,
            ListVariant::Incidents => Some(IssueKind::Incident),
        }
    }

    pub fn supports_kind_restriction(&self) -> bool {
        matches!(self, ListVariant::Issues)
    }

    pub fn default_noun(&self) -> &'static str {
        match self {
            ListVariant::Issues => IssueKind::Issue.noun(),
            ListVariant::Incidents => IssueKind::Incident.noun(),
        }
    }
}

impl fmt::Display for ListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListVariant::Issues => write!(f, "issue"),
            ListVariant::Incidents => write!(f, "incident"),
        }
    }
}

/// State filter as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    Opened,
    Closed,
    All,
}

impl StateFilter {
    /// Word placed before the noun in headers and empty-result messages.
    pub fn qualifier(&self) -> Option<&'static str> {
        match self {
            StateFilter::Opened => Some("open"),
            StateFilter::Closed => Some("closed"),
            StateFilter::All => None,
        }
    }
}

impl From<StateFilter> for IssueStateFilter {
    fn from(state: StateFilter) -> Self {
        match state {
            StateFilter::Opened => IssueStateFilter::Opened,
            StateFilter::Closed => IssueStateFilter::Closed,
            StateFilter::All => IssueStateFilter::All,
        }
    }
}

/// The rendering variant, resolved from `--output` / `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Ids,
    Urls,
    Json,
}

/// Values of `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

/// Values of `--output-format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Details,
    Ids,
    Urls,
}

impl OutputMode {
    /// Resolves the two output flags. Callers reject the case where both are set.
    pub fn from_args(output: Option<OutputArg>, output_format: Option<OutputFormatArg>) -> Self {
        match (output, output_format) {
            (Some(OutputArg::Json), _) => OutputMode::Json,
            (_, Some(OutputFormatArg::Ids)) => OutputMode::Ids,
            (_, Some(OutputFormatArg::Urls)) => OutputMode::Urls,
            _ => OutputMode::Table,
        }
    }
}

/// Values of `--issue-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IssueTypeArg {
    Issue,
    Incident,
    #[value(name = "test_case")]
    TestCase,
}

impl From<IssueTypeArg> for IssueKind {
    fn from(arg: IssueTypeArg) -> Self {
        match arg {
            IssueTypeArg::Issue => IssueKind::Issue,
            IssueTypeArg::Incident => IssueKind::Incident,
            IssueTypeArg::TestCase => IssueKind::TestCase,
        }
    }
}
