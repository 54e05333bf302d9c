// ABOUTME: Builder pattern implementation for GitLabClient configuration
// ABOUTME: Provides type-safe configuration with compile-time validation

use crate::GitLabClient;
use crate::constants::timeouts;
use crate::error::GitLabError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<GitLabClient, GitLabError>))]
pub struct GitLabClientConfig {
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Instance root such as `https://gitlab.example.com`; the API prefix is appended
    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<GitLabClientConfig> for Result<GitLabClient, GitLabError> {
    fn from(config: GitLabClientConfig) -> Self {
        GitLabClient::from_config(config)
    }
}

impl GitLabClient {
    pub fn builder() -> GitLabClientConfigBuilder<((), (), ())> {
        GitLabClientConfig::builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GitLabClient;
    use secrecy::SecretString;
    use std::time::Duration;

    fn token() -> SecretString {
        SecretString::new("glpat-test-token".to_string().into_boxed_str())
    }

    #[test]
    fn test_builder_with_minimal_config() {
        let client_result = GitLabClient::builder().auth_token(token()).build();
        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_with_all_options() {
        let client_result = GitLabClient::builder()
            .auth_token(token())
            .timeout(Duration::from_secs(60))
            .base_url(Some("https://gitlab.example.com".to_string()))
            .build();

        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = GitLabClient::builder()
            .auth_token(token())
            .base_url(Some("not a url".to_string()))
            .build();

        match result {
            Err(GitLabError::Configuration(msg)) => assert!(msg.contains("Invalid base URL")),
            other => panic!("Expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_builder_rejects_token_with_newline() {
        let result = GitLabClient::builder()
            .auth_token(SecretString::new("bad\ntoken".to_string().into_boxed_str()))
            .build();

        assert!(matches!(result, Err(GitLabError::Configuration(_))));
    }

    #[test]
    fn test_config_uses_secrecy_for_sensitive_data() {
        let debug_str = format!("{:?}", token());
        assert!(!debug_str.contains("glpat-test-token"));
    }
}
