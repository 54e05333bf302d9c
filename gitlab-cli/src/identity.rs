// ABOUTME: Resolves the "mine" filter to the username behind the configured token
// ABOUTME: Issues a single current-user lookup and leaves explicit assignees untouched

use gitlab_sdk::{GitLabError, IssuableApi};

use crate::filter::FilterSpec;

/// The assignee username to filter by.
///
/// With `--mine` this performs exactly one `GET /user`; any failure aborts the
/// listing. Without it the explicit `--assignee` value is returned as is.
pub async fn resolve_assignee<A>(api: &A, spec: &FilterSpec) -> Result<Option<String>, GitLabError>
where
    A: IssuableApi + ?Sized,
{
    if !spec.mine {
        return Ok(spec.assignee.clone());
    }

    let user = api.current_user().await?;
    log::debug!("Resolved --mine to {}", user.username);
    Ok(Some(user.username))
}
