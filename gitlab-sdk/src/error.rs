// ABOUTME: Custom error types for GitLab SDK with user-friendly messages
// ABOUTME: Classifies transport failures and non-success HTTP statuses from the GitLab API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitLabError {
    #[error("Authentication failed. Check your GITLAB_TOKEN")]
    Auth,

    #[error("{0} not found")]
    NotFound(String),

    #[error("GitLab API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GitLabError {
    /// Build an error from a non-success status and the response body.
    ///
    /// GitLab reports failures as `{"message": ...}` (sometimes `{"error": ...}`);
    /// the raw body is used when it is not JSON.
    pub fn from_status(status: u16, resource: &str, body: &str) -> Self {
        match status {
            401 => GitLabError::Auth,
            404 => GitLabError::NotFound(resource.to_string()),
            _ => GitLabError::Api {
                status,
                message: extract_message(body),
            },
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            GitLabError::Auth => Some(
                "Create a personal access token with the read_api scope and export it as GITLAB_TOKEN",
            ),
            GitLabError::NotFound(_) => {
                Some("Check the project or group path and that your token can access it")
            }
            GitLabError::Network(_) => Some("Check your internet connection and try again"),
            GitLabError::Timeout => Some("Try again or check your network connection"),
            GitLabError::Configuration(_) => {
                Some("Check the host, api_url and token settings in your config file")
            }
            _ => None,
        }
    }
}

fn extract_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("error"))
            .map(|message| match message {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    });

    match message {
        Some(message) => message,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.trim().to_string(),
    }
}

impl From<reqwest::Error> for GitLabError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GitLabError::Timeout
        } else if err.is_decode() {
            GitLabError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            GitLabError::from_status(status.as_u16(), "Resource", "")
        } else {
            GitLabError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GitLabError {
    fn from(err: serde_json::Error) -> Self {
        GitLabError::InvalidResponse(err.to_string())
    }
}
