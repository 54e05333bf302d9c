// ABOUTME: Centralized constants for the GitLab SDK
// ABOUTME: Contains API URLs, request headers, timeouts, and pagination defaults

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// GitLab API URLs
pub mod urls {
    /// Default GitLab instance
    pub const GITLAB_BASE: &str = "https://gitlab.com";

    /// Path segments of the REST API root, appended to the instance URL
    pub const API_PREFIX: &[&str] = &["api", "v4"];
}

/// Request headers
pub mod headers {
    /// Header carrying a personal access token (header names are case-insensitive)
    pub const PRIVATE_TOKEN: &str = "private-token";

    pub const USER_AGENT: &str = concat!("gitlab-cli/", env!("CARGO_PKG_VERSION"));
}

/// Pagination defaults applied by GitLab list endpoints
pub mod pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 30;
    pub const MAX_PER_PAGE: u32 = 100;
}

/// Fixed query parameter values
pub mod query {
    /// Fields the `search` parameter is matched against
    pub const SEARCH_IN: &str = "title,description";
}
