//! Comment records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deletion_state, Deletion, User, UserGroup};
use crate::errors::Result;

/// A comment as returned by the server.
///
/// Comments form a tree: `parent_id` is `None` for top-level comments and
/// `ancestors` lists every comment id from the root down to the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub post_public_id: String,
    pub community_id: String,
    pub community_name: String,

    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub user_group: UserGroup,
    #[serde(default)]
    pub user_deleted: bool,

    pub parent_id: Option<String>,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub no_replies: i64,
    #[serde(default)]
    pub no_replies_direct: i64,
    pub ancestors: Option<Vec<String>>,

    pub body: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub content_stripped: Option<bool>,

    #[serde(default)]
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_as: Option<UserGroup>,

    pub author: Option<User>,
    #[serde(default)]
    pub is_author_muted: bool,
    pub user_voted: Option<bool>,
    pub user_voted_up: Option<bool>,

    pub post_title: Option<String>,
    #[serde(default)]
    pub post_deleted: bool,
    pub post_deleted_as: Option<UserGroup>,
}

impl Comment {
    /// Deletion state, or an error if `deletedAt`/`deletedAs` disagree.
    pub fn deletion(&self) -> Result<Option<Deletion>> {
        deletion_state(self.deleted_at, self.deleted_as)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Upvotes minus downvotes.
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// One page of comments under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub next: Option<String>,
}
