// ABOUTME: CLI argument definitions for GitLab CLI application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};

use crate::constants::env;
use crate::filter::RawListArgs;
use crate::types::{IssueTypeArg, ListVariant, OutputArg, OutputFormatArg};

#[derive(Parser, Debug)]
#[command(name = "gitlab")]
#[command(about = "A CLI for GitLab issues and incidents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Select another repository using the OWNER/REPO or GROUP/NAMESPACE/REPO format or full URL
    #[arg(short = 'R', long, global = true, env = env::GITLAB_REPO)]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with GitLab issues
    Issue {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Work with GitLab incidents
    Incident {
        #[command(subcommand)]
        command: ListCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// List project or group issuables
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

impl Commands {
    pub fn variant(&self) -> ListVariant {
        match self {
            Commands::Issue { .. } => ListVariant::Issues,
            Commands::Incident { .. } => ListVariant::Incidents,
        }
    }

    /// The list arguments tagged with the listing variant.
    pub fn into_raw(self) -> RawListArgs {
        let variant = self.variant();
        match self {
            Commands::Issue {
                command: ListCommand::List(args),
            }
            | Commands::Incident {
                command: ListCommand::List(args),
            } => args.into_raw(variant),
        }
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Get only open issues
    #[arg(short = 'o', long)]
    pub opened: bool,

    /// Get only closed issues
    #[arg(short = 'c', long)]
    pub closed: bool,

    /// Get all issues
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Page number
    #[arg(short = 'P', long)]
    pub page: Option<u32>,

    /// Number of items to list per page (max 100)
    #[arg(short = 'p', long)]
    pub per_page: Option<u32>,

    /// Filter by confidential issues
    #[arg(short = 'C', long)]
    pub confidential: bool,

    /// Filter issue by assignee <username>
    #[arg(short = 'a', long)]
    pub assignee: Option<String>,

    /// Filter issue by not being assigned to <username>
    #[arg(long)]
    pub not_assignee: Option<String>,

    /// Filter issue by author <username>
    #[arg(long)]
    pub author: Option<String>,

    /// Filter by not being by author(s) <username>
    #[arg(long)]
    pub not_author: Option<String>,

    /// Filter issue by label <name>
    #[arg(short = 'l', long = "label", value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Filter issue by lack of label <name>
    #[arg(long = "not-label", value_delimiter = ',')]
    pub not_labels: Vec<String>,

    /// Filter issue by milestone <id>
    #[arg(short = 'm', long)]
    pub milestone: Option<String>,

    /// Filter issue by iteration <id>
    #[arg(short = 'i', long)]
    pub iteration: Option<u64>,

    /// Search <string> in the fields defined by '--in'
    #[arg(long)]
    pub search: Option<String>,

    /// Filter only issues assigned to me
    #[arg(short = 'M', long)]
    pub mine: bool,

    /// Filter issue by its type
    #[arg(short = 't', long, value_enum)]
    pub issue_type: Option<IssueTypeArg>,

    /// Get issues from group and its subgroups
    #[arg(short = 'g', long)]
    pub group: Option<String>,

    /// Options: 'text' or 'json'
    #[arg(short = 'O', long, value_enum)]
    pub output: Option<OutputArg>,

    /// Options: 'details', 'ids', 'urls'
    #[arg(short = 'F', long, value_enum)]
    pub output_format: Option<OutputFormatArg>,
}

impl ListArgs {
    pub fn into_raw(self, variant: ListVariant) -> RawListArgs {
        RawListArgs {
            variant,
            opened: self.opened,
            closed: self.closed,
            all: self.all,
            page: self.page,
            per_page: self.per_page,
            confidential: self.confidential,
            assignee: self.assignee,
            not_assignee: self.not_assignee,
            author: self.author,
            not_author: self.not_author,
            labels: self.labels,
            not_labels: self.not_labels,
            milestone: self.milestone,
            iteration: self.iteration,
            search: self.search,
            mine: self.mine,
            issue_type: self.issue_type.map(Into::into),
            group: self.group,
            output: self.output,
            output_format: self.output_format,
        }
    }
}
