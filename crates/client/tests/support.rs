//! Shared fixtures for the client integration tests.

#![allow(dead_code)]

use discuit_client::DiscuitClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID: &str = "sess-abc";
pub const CSRF_TOKEN: &str = "csrf-xyz";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> DiscuitClient {
    DiscuitClient::builder().base_url(server.uri()).build().expect("client should build")
}

/// Post payload the way the server sends it.
pub fn post_json(public_id: &str, upvotes: i64, downvotes: i64) -> Value {
    json!({
        "id": format!("post-{public_id}"),
        "type": "text",
        "publicId": public_id,
        "userId": "user-1",
        "username": "alice",
        "userGroup": "normal",
        "userDeleted": false,
        "isPinned": false,
        "communityId": "comm-1",
        "communityName": "rust",
        "communityProPic": null,
        "communityBannerImage": null,
        "title": "Hello",
        "body": "First post",
        "image": null,
        "link": null,
        "locked": false,
        "lockedBy": null,
        "lockedAs": null,
        "lockedAt": null,
        "upvotes": upvotes,
        "downvotes": downvotes,
        "hotness": 1234,
        "createdAt": "2024-02-20T10:00:00Z",
        "editedAt": null,
        "lastActivityAt": "2024-02-20T10:00:00Z",
        "deleted": false,
        "deletedAt": null,
        "deletedBy": null,
        "deletedAs": null,
        "deletedContent": false,
        "deletedContentAs": null,
        "noComments": 0,
        "comments": null,
        "commentsNext": null,
        "userVoted": null,
        "userVotedUp": null,
        "isAuthorMuted": false,
        "isCommunityMuted": false,
        "community": null,
        "author": null
    })
}

/// Comment payload under post `post_public_id`.
pub fn comment_json(id: &str, post_public_id: &str, parent_id: Option<&str>) -> Value {
    let depth = u32::from(parent_id.is_some());
    let ancestors = parent_id.map(|parent| vec![parent]);
    json!({
        "id": id,
        "postId": format!("post-{post_public_id}"),
        "postPublicId": post_public_id,
        "communityId": "comm-1",
        "communityName": "rust",
        "userId": "user-1",
        "username": "alice",
        "userGroup": "normal",
        "parentId": parent_id,
        "depth": depth,
        "noReplies": 0,
        "noRepliesDirect": 0,
        "ancestors": ancestors,
        "body": "Nice post",
        "upvotes": 1,
        "downvotes": 0,
        "createdAt": "2024-02-20T11:00:00Z",
        "editedAt": null,
        "deleted": false,
        "deletedAt": null,
        "deletedAs": null,
        "author": null,
        "isAuthorMuted": false,
        "userVoted": null,
        "userVotedUp": null,
        "postTitle": "Hello",
        "postDeleted": false,
        "postDeletedAs": null
    })
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "points": 42,
        "isAdmin": false,
        "badges": [],
        "noPosts": 3,
        "noComments": 7,
        "createdAt": "2023-06-01T12:00:00Z"
    })
}

pub fn initial_json() -> Value {
    json!({
        "reportReasons": [],
        "user": null,
        "communities": [],
        "noUsers": 1,
        "bannedFrom": null,
        "vapidPublicKey": "vapid",
        "mutes": { "communityMutes": [], "userMutes": [] }
    })
}

/// Mount an `_initial` endpoint that hands out both session cookies.
pub async fn mount_initial(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/_initial"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", format!("SID={SESSION_ID}; Path=/; HttpOnly"))
                .append_header("set-cookie", format!("csrftoken={CSRF_TOKEN}; Path=/"))
                .set_body_json(initial_json()),
        )
        .mount(server)
        .await;
}

/// Client whose session has already been initialized against `server`.
pub async fn initialized_client(server: &MockServer) -> DiscuitClient {
    mount_initial(server).await;
    let client = client_for(server);
    client.initialize().await.expect("initialize should succeed");
    client
}
