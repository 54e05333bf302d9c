// ABOUTME: Translates a validated filter spec into one issue listing request
// ABOUTME: Fetches a single page from the project or group endpoint

use gitlab_sdk::{GitLabError, IssuableApi, Issue, ListIssuesOptions, Page};

use crate::filter::FilterSpec;

/// Request options for `spec`, with the assignee already resolved.
pub fn list_options(spec: &FilterSpec, assignee: Option<String>) -> ListIssuesOptions {
    ListIssuesOptions::builder()
        .scope(spec.scope.clone())
        .state(spec.state.into())
        .labels(spec.labels.clone())
        .not_labels(spec.not_labels.clone())
        .milestone(spec.milestone.clone())
        .assignee_username(assignee)
        .not_assignee_username(spec.not_assignee.clone())
        .author_username(spec.author.clone())
        .not_author_username(spec.not_author.clone())
        .search(spec.search.clone())
        .confidential(spec.confidential)
        .iteration_id(spec.iteration_id)
        .issue_type(spec.effective_kind())
        .page(spec.page)
        .per_page(spec.per_page)
        .build()
}

/// Fetches the page described by `spec`. Errors are returned unchanged.
pub async fn fetch<A>(
    api: &A,
    spec: &FilterSpec,
    assignee: Option<String>,
) -> Result<Page<Issue>, GitLabError>
where
    A: IssuableApi + ?Sized,
{
    let options = list_options(spec, assignee);
    api.list_issues(&options).await
}
