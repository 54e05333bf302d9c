// ABOUTME: The issue listing pipeline shared by the issue and incident commands
// ABOUTME: Sequences identity resolution, the single page fetch, and rendering

use anyhow::Result;
use gitlab_sdk::IssuableApi;

use crate::executor;
use crate::filter::FilterSpec;
use crate::identity;
use crate::output::{self, RenderOptions};

/// Rendered output of one list invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutput {
    pub text: String,
    pub page: u32,
    /// A full page came back, so the next page may have results.
    pub has_more: bool,
}

impl ListOutput {
    /// Suggestion shown on interactive terminals when more pages may exist.
    pub fn next_page_hint(&self) -> Option<String> {
        let next = self.page.checked_add(1).filter(|_| self.has_more)?;
        Some(format!("More results may be available. Use --page {}", next))
    }
}

pub async fn run<A>(api: &A, spec: &FilterSpec, options: &RenderOptions) -> Result<ListOutput>
where
    A: IssuableApi + ?Sized,
{
    let assignee = identity::resolve_assignee(api, spec).await?;
    let page = executor::fetch(api, spec, assignee).await?;
    let text = output::render(&page, spec, options)?;

    Ok(ListOutput {
        text,
        page: page.page,
        has_more: page.has_more(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RawListArgs;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use gitlab_sdk::{GitLabError, Issue, ListIssuesOptions, Page, User};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        user_lookups: Mutex<usize>,
        requests: Mutex<Vec<ListIssuesOptions>>,
        items: usize,
    }

    fn issue(iid: u64) -> Issue {
        serde_json::from_value(json!({
            "id": iid,
            "iid": iid,
            "title": format!("Issue {iid}"),
            "state": "opened",
            "labels": [],
            "author": {"id": 1, "username": "john_smith", "name": "John Smith"},
            "created_at": "2016-01-04T15:31:51Z",
            "web_url": format!("http://gitlab.com/OWNER/REPO/issues/{iid}"),
            "references": {"short": "#1", "relative": "#1", "full": "OWNER/REPO/issues/1"}
        }))
        .unwrap()
    }

    #[async_trait]
    impl IssuableApi for RecordingApi {
        async fn current_user(&self) -> gitlab_sdk::Result<User> {
            *self.user_lookups.lock().unwrap() += 1;
            Err(GitLabError::NotFound("Current user".to_string()))
        }

        async fn list_issues(&self, options: &ListIssuesOptions) -> gitlab_sdk::Result<Page<Issue>> {
            self.requests.lock().unwrap().push(options.clone());
            let items = (1..=self.items as u64).map(issue).collect();
            Ok(Page::new(items, options.page, options.per_page))
        }
    }

    fn options() -> RenderOptions {
        RenderOptions::plain(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())
    }

    fn spec(raw: RawListArgs) -> FilterSpec {
        FilterSpec::build(raw, || Ok("OWNER/REPO".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_run_renders_single_request() {
        let api = RecordingApi {
            items: 2,
            ..Default::default()
        };

        let result = run(&api, &spec(RawListArgs::default()), &options())
            .await
            .unwrap();

        assert!(result.text.starts_with("Showing 2 open issues in OWNER/REPO"));
        assert!(!result.has_more);
        assert_eq!(result.next_page_hint(), None);
        assert_eq!(api.requests.lock().unwrap().len(), 1);
        assert_eq!(*api.user_lookups.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_full_page_suggests_next_page() {
        let api = RecordingApi {
            items: 2,
            ..Default::default()
        };
        let spec = spec(RawListArgs {
            per_page: Some(2),
            page: Some(3),
            ..Default::default()
        });

        let result = run(&api, &spec, &options()).await.unwrap();

        assert!(result.has_more);
        assert_eq!(
            result.next_page_hint().as_deref(),
            Some("More results may be available. Use --page 4")
        );
    }

    #[test]
    fn test_no_hint_past_last_page_number() {
        let output = ListOutput {
            text: String::new(),
            page: u32::MAX,
            has_more: true,
        };
        assert_eq!(output.next_page_hint(), None);
    }

    #[tokio::test]
    async fn test_identity_failure_skips_listing() {
        let api = RecordingApi::default();
        let spec = spec(RawListArgs {
            mine: true,
            all: true,
            ..Default::default()
        });

        let err = run(&api, &spec, &options()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GitLabError>(),
            Some(GitLabError::NotFound(_))
        ));
        assert_eq!(*api.user_lookups.lock().unwrap(), 1);
        assert!(api.requests.lock().unwrap().is_empty());
    }
}
