// ABOUTME: GitLab SDK library providing a typed REST client for the GitLab v4 API
// ABOUTME: Includes authentication, issue listing, current-user lookup, and wire types

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

pub mod builder;
pub mod constants;
pub mod error;
pub mod query;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use builder::GitLabClientConfig;
pub use error::GitLabError;
pub use query::{IssueScope, IssueStateFilter, ListIssuesOptions};
pub use types::{Issue, IssueKind, IssueReferences, IssueState, Page, Timestamp, User};

pub type Result<T> = std::result::Result<T, GitLabError>;

/// The API surface the listing pipeline depends on.
#[async_trait]
pub trait IssuableApi: Send + Sync {
    /// `GET /user`: the identity behind the configured token.
    async fn current_user(&self) -> Result<User>;

    /// `GET /projects/:id/issues` or `GET /groups/:id/issues`, one page.
    async fn list_issues(&self, options: &ListIssuesOptions) -> Result<Page<Issue>>;
}

pub struct GitLabClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GitLabClient {
    pub fn new(token: String) -> Result<Self> {
        Self::builder()
            .auth_token(SecretString::new(token.into_boxed_str()))
            .build()
    }

    pub(crate) fn from_config(config: GitLabClientConfig) -> Result<Self> {
        let mut token = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|e| GitLabError::Configuration(format!("Invalid token: {}", e)))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(constants::headers::PRIVATE_TOKEN, token);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(constants::headers::USER_AGENT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GitLabError::Configuration(format!("HTTP client: {}", e)))?;

        let base = config
            .base_url
            .as_deref()
            .unwrap_or(constants::urls::GITLAB_BASE);
        let base_url = Url::parse(base)
            .map_err(|e| GitLabError::Configuration(format!("Invalid base URL '{}': {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitLabError::Configuration(format!(
                "Invalid base URL '{}': not a hierarchical URL",
                base
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API URL for the given path segments; each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GitLabError::Configuration(format!("Invalid base URL '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(constants::urls::API_PREFIX.iter().chain(segments.iter()));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<T> {
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} request failed with status {}", resource, status);
            return Err(GitLabError::from_status(status.as_u16(), resource, &body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl IssuableApi for GitLabClient {
    async fn current_user(&self) -> Result<User> {
        let url = self.endpoint(&["user"])?;
        self.get_json(url, &[], "Current user").await
    }

    async fn list_issues(&self, options: &ListIssuesOptions) -> Result<Page<Issue>> {
        let url = self.endpoint(&options.scope.path_segments())?;
        let items: Vec<Issue> = self
            .get_json(url, &options.query_pairs(), &options.scope.describe())
            .await?;

        log::debug!(
            "Fetched {} issue(s) from {} (page {})",
            items.len(),
            options.scope,
            options.page
        );
        Ok(Page::new(items, options.page, options.per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> GitLabClient {
        GitLabClient::builder()
            .auth_token(SecretString::new("test-token".to_string().into_boxed_str()))
            .base_url(Some(server.url()))
            .build()
            .unwrap()
    }

    fn project_options() -> ListIssuesOptions {
        ListIssuesOptions::builder()
            .scope(IssueScope::Project("OWNER/REPO".to_string()))
            .build()
    }

    #[test]
    fn test_gitlab_client_creation() {
        let client = GitLabClient::new("test_token".to_string());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url().as_str(), "https://gitlab.com/");
    }

    #[test]
    fn test_endpoint_encodes_full_path() {
        let client = GitLabClient::new("test_token".to_string()).unwrap();
        let url = client
            .endpoint(&["projects", "OWNER/REPO", "issues"])
            .unwrap();
        assert_eq!(url.as_str(), "https://gitlab.com/api/v4/projects/OWNER%2FREPO/issues");
    }

    #[test]
    fn test_endpoint_keeps_instance_subpath() {
        let client = GitLabClient::builder()
            .auth_token(SecretString::new("t".to_string().into_boxed_str()))
            .base_url(Some("https://example.com/gitlab/".to_string()))
            .build()
            .unwrap();
        let url = client.endpoint(&["user"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/gitlab/api/v4/user");
    }

    #[tokio::test]
    async fn test_current_user() {
        let mut server = mock_gitlab_server().await;
        let mock = server
            .mock("GET", "/api/v4/user")
            .match_header("private-token", "test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_user_response().to_string())
            .create_async()
            .await;

        let user = client_for(&server).current_user().await.unwrap();

        mock.assert_async().await;
        assert_eq!(user.username, "john_smith");
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_current_user_not_found() {
        let mut server = mock_gitlab_server().await;
        let mock = server
            .mock("GET", "/api/v4/user")
            .with_status(404)
            .with_body(mock_not_found_response().to_string())
            .create_async()
            .await;

        let result = client_for(&server).current_user().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(GitLabError::NotFound(ref what)) if what == "Current user"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth() {
        let mut server = mock_gitlab_server().await;
        let _mock = server
            .mock("GET", "/api/v4/user")
            .with_status(401)
            .with_body(mock_unauthorized_response().to_string())
            .create_async()
            .await;

        let result = client_for(&server).current_user().await;
        assert!(matches!(result, Err(GitLabError::Auth)));
    }

    #[tokio::test]
    async fn test_list_project_issues() {
        let mut server = mock_gitlab_server().await;
        let mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/api/v4/projects/OWNER%2FREPO/issues$".to_string()),
            )
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "opened".into()),
                Matcher::UrlEncoded("in".into(), "title,description".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "30".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_issues_response().to_string())
            .create_async()
            .await;

        let page = client_for(&server)
            .list_issues(&project_options())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.len(), 3);
        assert_eq!(page.page, 1);
        assert!(!page.has_more());
        let iids: Vec<u64> = page.iter().map(|issue| issue.iid).collect();
        assert_eq!(iids, vec![6, 7, 8]);
    }

    #[tokio::test]
    async fn test_list_group_issues() {
        let mut server = mock_gitlab_server().await;
        let mock = server
            .mock("GET", "/api/v4/groups/GROUP/issues")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let options = ListIssuesOptions::builder()
            .scope(IssueScope::Group("GROUP".to_string()))
            .build();
        let page = client_for(&server).list_issues(&options).await.unwrap();

        mock.assert_async().await;
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_list_issues_malformed_payload() {
        let mut server = mock_gitlab_server().await;
        let _mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/api/v4/projects/OWNER%2FREPO/issues$".to_string()),
            )
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"iid": 1}]"#)
            .create_async()
            .await;

        let result = client_for(&server).list_issues(&project_options()).await;
        assert!(matches!(result, Err(GitLabError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_list_issues_server_error() {
        let mut server = mock_gitlab_server().await;
        let _mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/api/v4/projects/OWNER%2FREPO/issues$".to_string()),
            )
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"message":"500 Internal Server Error"}"#)
            .create_async()
            .await;

        let result = client_for(&server).list_issues(&project_options()).await;
        match result {
            Err(GitLabError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "500 Internal Server Error");
            }
            other => panic!("Expected API error, got {:?}", other.map(|page| page.len())),
        }
    }

    #[tokio::test]
    #[ignore] // Run with: GITLAB_TOKEN=... cargo test -- --ignored
    async fn test_real_api() {
        let token =
            std::env::var("GITLAB_TOKEN").expect("GITLAB_TOKEN must be set for integration tests");

        let client = GitLabClient::new(token).expect("Failed to create client");
        let user = client.current_user().await;

        assert!(user.is_ok(), "Current user lookup should succeed with a valid token");
        assert!(!user.unwrap().username.is_empty());
    }
}
