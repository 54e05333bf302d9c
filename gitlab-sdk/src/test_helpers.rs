// ABOUTME: Test helper utilities for mocking GitLab API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing API interactions

#[cfg(test)]
use mockito::{Server, ServerGuard};
#[cfg(test)]
use serde_json::json;

#[cfg(test)]
pub async fn mock_gitlab_server() -> ServerGuard {
    Server::new_async().await
}

#[cfg(test)]
pub fn mock_user_response() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "john_smith",
        "name": "John Smith",
        "state": "active",
        "avatar_url": "https://secure.gravatar.com/avatar/john_smith?s=80&d=identicon",
        "web_url": "https://gitlab.com/john_smith"
    })
}

#[cfg(test)]
pub fn mock_issue(iid: u64, title: &str, issue_type: &str) -> serde_json::Value {
    json!({
        "id": 100 + iid,
        "iid": iid,
        "project_id": 1,
        "title": title,
        "description": format!("Description for issue {iid}"),
        "state": "opened",
        "created_at": "2016-01-04T15:31:51.081Z",
        "updated_at": "2016-01-04T15:31:51.081Z",
        "closed_at": null,
        "labels": ["foo", "bar"],
        "milestone": null,
        "assignees": [],
        "author": {
            "id": 1,
            "username": "john_smith",
            "name": "John Smith",
            "state": "active",
            "web_url": "https://gitlab.com/john_smith"
        },
        "confidential": false,
        "web_url": format!("http://gitlab.com/OWNER/REPO/issues/{iid}"),
        "references": {
            "short": format!("#{iid}"),
            "relative": format!("#{iid}"),
            "full": format!("OWNER/REPO/issues/{iid}")
        },
        "issue_type": issue_type
    })
}

#[cfg(test)]
pub fn mock_issues_response() -> serde_json::Value {
    json!([
        mock_issue(6, "Issue one", "issue"),
        mock_issue(7, "Issue two", "issue"),
        mock_issue(8, "Incident", "incident")
    ])
}

#[cfg(test)]
pub fn mock_not_found_response() -> serde_json::Value {
    json!({ "message": "404 Not found" })
}

#[cfg(test)]
pub fn mock_unauthorized_response() -> serde_json::Value {
    json!({ "message": "401 Unauthorized" })
}
