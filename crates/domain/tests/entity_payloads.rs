//! Integration tests for entity payload decoding
//!
//! Uses payloads shaped like real server responses to check that nothing is
//! renamed, dropped or transformed on the way into the typed structs.

use chrono::{TimeZone, Utc};
use discuit_domain::{
    Comment, Deletion, InitialResponse, Post, PostType, Report, ReportTarget, TargetType,
    UserGroup,
};
use serde_json::{json, Value};

// ============================================================================
// Fixtures
// ============================================================================

fn post_payload() -> Value {
    json!({
        "id": "17a2b3c4d5e6f7a8",
        "type": "link",
        "publicId": "abc123",
        "userId": "u-1",
        "username": "alice",
        "userGroup": "normal",
        "userDeleted": false,
        "isPinned": false,
        "isPinnedSite": false,
        "communityId": "c-1",
        "communityName": "rust",
        "communityProPic": null,
        "communityBannerImage": null,
        "title": "Rust 2024 edition is out",
        "body": null,
        "image": null,
        "link": {
            "url": "https://blog.rust-lang.org/",
            "hostname": "blog.rust-lang.org",
            "image": null
        },
        "locked": false,
        "lockedBy": null,
        "lockedAs": null,
        "lockedAt": null,
        "upvotes": 42,
        "downvotes": 3,
        "hotness": 1234,
        "createdAt": "2024-02-20T08:30:00Z",
        "editedAt": null,
        "lastActivityAt": "2024-02-21T09:00:00Z",
        "deleted": false,
        "deletedAt": null,
        "deletedBy": null,
        "deletedAs": null,
        "deletedContent": false,
        "deletedContentAs": null,
        "noComments": 7,
        "comments": null,
        "commentsNext": null,
        "userVoted": true,
        "userVotedUp": true,
        "isAuthorMuted": false,
        "isCommunityMuted": false
    })
}

fn comment_payload() -> Value {
    json!({
        "id": "cm-2",
        "postId": "17a2b3c4d5e6f7a8",
        "postPublicId": "abc123",
        "communityId": "c-1",
        "communityName": "rust",
        "userId": "u-2",
        "username": "bob",
        "userGroup": "mods",
        "parentId": "cm-1",
        "depth": 1,
        "noReplies": 0,
        "noRepliesDirect": 0,
        "ancestors": ["cm-1"],
        "body": "Removed: off topic",
        "upvotes": 1,
        "downvotes": 0,
        "createdAt": "2024-02-20T09:00:00Z",
        "editedAt": null,
        "deleted": true,
        "deletedAt": "2024-02-20T10:00:00Z",
        "deletedAs": "mods",
        "postTitle": "Rust 2024 edition is out",
        "postDeleted": false,
        "postDeletedAs": null
    })
}

// ============================================================================
// Posts
// ============================================================================

#[test]
fn test_post_fields_read_back_unchanged() {
    let payload = post_payload();
    let post: Post = serde_json::from_value(payload.clone()).expect("post should decode");

    assert_eq!(post.id, payload["id"]);
    assert_eq!(post.public_id, "abc123");
    assert_eq!(post.post_type, PostType::Link);
    assert_eq!(post.username, "alice");
    assert_eq!(post.user_group, UserGroup::Normal);
    assert_eq!(post.community_name, "rust");
    assert_eq!(post.title, "Rust 2024 edition is out");
    assert_eq!(post.upvotes, 42);
    assert_eq!(post.downvotes, 3);
    assert_eq!(post.score(), 39);
    assert_eq!(post.no_comments, 7);
    assert_eq!(post.user_voted_up, Some(true));
    assert_eq!(post.created_at, Utc.with_ymd_and_hms(2024, 2, 20, 8, 30, 0).unwrap());

    let link = post.link.as_ref().expect("link post should carry a link");
    assert_eq!(link.hostname, "blog.rust-lang.org");

    assert_eq!(post.deletion().unwrap(), None);
}

#[test]
fn test_post_reencodes_to_same_values() {
    let payload = post_payload();
    let post: Post = serde_json::from_value(payload.clone()).unwrap();
    let reencoded = serde_json::to_value(&post).unwrap();

    for key in ["id", "publicId", "type", "title", "upvotes", "downvotes", "communityId", "link"] {
        assert_eq!(reencoded[key], payload[key], "field {key} changed");
    }
}

#[test]
fn test_post_with_half_set_deletion_is_flagged() {
    let mut payload = post_payload();
    payload["deletedAt"] = json!("2024-02-22T00:00:00Z");

    let post: Post = serde_json::from_value(payload).unwrap();
    assert!(post.deletion().is_err());
}

#[test]
fn test_post_minimal_payload_uses_defaults() {
    let post: Post = serde_json::from_value(json!({
        "id": "1",
        "type": "text",
        "publicId": "p1",
        "userId": "u",
        "username": "u",
        "communityId": "c",
        "communityName": "c",
        "title": "t",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(post.upvotes, 0);
    assert!(!post.locked);
    assert_eq!(post.user_group, UserGroup::Normal);
    assert!(post.comments.is_none());
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_comment_deleted_as_mods() {
    let comment: Comment = serde_json::from_value(comment_payload()).unwrap();

    assert!(!comment.is_top_level());
    assert_eq!(comment.ancestors.as_deref(), Some(&["cm-1".to_string()][..]));
    assert_eq!(
        comment.deletion().unwrap(),
        Some(Deletion {
            at: Utc.with_ymd_and_hms(2024, 2, 20, 10, 0, 0).unwrap(),
            as_group: UserGroup::Mods,
        })
    );
}

// ============================================================================
// Reports and bootstrap
// ============================================================================

#[test]
fn test_report_target_keyed_by_type() {
    let report: Report = serde_json::from_value(json!({
        "id": 5,
        "communityId": "c-1",
        "postId": "17a2b3c4d5e6f7a8",
        "reason": "Spam",
        "description": null,
        "reasonId": 2,
        "targetId": "cm-2",
        "actionTaken": null,
        "dealtAt": null,
        "dealtBy": null,
        "createdAt": "2024-02-20T11:00:00Z",
        "type": "comment",
        "target": comment_payload()
    }))
    .unwrap();

    assert_eq!(report.target.target_type(), TargetType::Comment);
    assert!(matches!(&report.target, ReportTarget::Comment(c) if c.id == "cm-2"));
    assert_eq!(report.target.deletion().unwrap().map(|d| d.as_group), Some(UserGroup::Mods));
}

#[test]
fn test_initial_response_without_user() {
    let initial: InitialResponse = serde_json::from_value(json!({
        "reportReasons": [{ "id": 1, "title": "Spam", "description": null }],
        "user": null,
        "communities": [],
        "noUsers": 1200,
        "bannedFrom": null,
        "vapidPublicKey": "BExampleKey",
        "mutes": { "communityMutes": [], "userMutes": [] }
    }))
    .unwrap();

    assert!(initial.user.is_none());
    assert_eq!(initial.report_reasons[0].title, "Spam");
    assert_eq!(initial.no_users, 1200);
    assert_eq!(initial.vapid_public_key, "BExampleKey");
}
