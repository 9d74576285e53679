//! Notifications
//!
//! The payload under `notif` depends on the `type` tag, so the content is
//! modelled as an adjacently tagged enum rather than a bag of optional
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, Community, Post, TargetType, User, UserGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub seen: bool,
    pub seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub content: NotificationContent,
}

/// Notification payload keyed by its `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "notif", rename_all = "snake_case")]
pub enum NotificationContent {
    NewComment(CommentNotif),
    CommentReply(CommentNotif),
    NewVotes(NewVotesNotif),
    DeletedPost(DeletedPostNotif),
    ModAdd(ModAddNotif),
    NewBadge(NewBadgeNotif),
}

impl NotificationContent {
    /// Wire tag of this notification.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NewComment(_) => "new_comment",
            Self::CommentReply(_) => "comment_reply",
            Self::NewVotes(_) => "new_votes",
            Self::DeletedPost(_) => "deleted_post",
            Self::ModAdd(_) => "mod_add",
            Self::NewBadge(_) => "new_badge",
        }
    }
}

/// A new comment on the user's post, or a reply to the user's comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNotif {
    pub post: Box<Post>,
    pub comment: Box<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVotesNotif {
    pub target_type: TargetType,
    pub no_votes: i64,
    pub post: Option<Box<Post>>,
    pub comment: Option<Box<Comment>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPostNotif {
    pub target_type: TargetType,
    pub deleted_as: UserGroup,
    pub post: Box<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModAddNotif {
    pub added_by: String,
    pub community: Box<Community>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBadgeNotif {
    pub badge_type: String,
    pub user: Box<User>,
}

/// One page of the notification inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub new_count: i64,
    #[serde(default)]
    pub items: Vec<Notification>,
    pub next: Option<String>,
}
