// ABOUTME: Centralized constants for the GitLab CLI application
// ABOUTME: Contains pagination limits, environment variable names, and terminal sequences

/// Pagination limits accepted by the list commands
pub mod limits {
    pub use gitlab_sdk::constants::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
}

/// Environment variables read once at startup
pub mod env {
    /// Any value other than empty or "0" forces hyperlinks on
    pub const FORCE_HYPERLINKS: &str = "FORCE_HYPERLINKS";
    pub const GITLAB_TOKEN: &str = "GITLAB_TOKEN";
    pub const GITLAB_HOST: &str = "GITLAB_HOST";
    pub const GITLAB_REPO: &str = "GITLAB_REPO";
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// UI and formatting constants
pub mod ui {
    /// Titles wider than this many terminal columns are truncated
    pub const TITLE_MAX_WIDTH: usize = 64;

    /// Appended to truncated titles
    pub const ELLIPSIS: &str = "...";

    /// Separator between table columns
    pub const COLUMN_SEPARATOR: char = '\t';

    /// OSC 8 hyperlink opener; followed by the URL and `OSC8_TERMINATOR`
    pub const OSC8_OPEN: &str = "\x1b]8;;";

    /// String terminator closing an OSC 8 parameter block
    pub const OSC8_TERMINATOR: &str = "\x1b\\";
}

/// Config file locations
pub mod config {
    /// Project-local config file name
    pub const LOCAL_FILE: &str = "gitlab-cli.toml";

    /// Directory under the XDG config home
    pub const APP_DIR: &str = "gitlab-cli";

    pub const FILE_NAME: &str = "config.toml";
}
