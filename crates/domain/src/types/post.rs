//! Post records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deletion_state, Comment, Community, Deletion, Image, PostType, User, UserGroup};
use crate::errors::Result;

/// A post as returned by the server.
///
/// `id` is the internal identifier; `public_id` is the short id used in
/// URLs and by every post endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub public_id: String,

    // Author
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub user_group: UserGroup,
    #[serde(default)]
    pub user_deleted: bool,

    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_pinned_site: bool,

    // Community
    pub community_id: String,
    pub community_name: String,
    pub community_pro_pic: Option<Image>,
    pub community_banner_image: Option<Image>,

    // Content
    pub title: String,
    pub body: Option<String>,
    pub image: Option<Image>,
    pub link: Option<Link>,

    #[serde(default)]
    pub locked: bool,
    pub locked_by: Option<String>,
    pub locked_as: Option<UserGroup>,
    pub locked_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub hotness: i64,

    pub created_at: DateTime<Utc>,
    pub edited_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<String>,
    pub deleted_as: Option<UserGroup>,
    #[serde(default)]
    pub deleted_content: bool,
    pub deleted_content_as: Option<UserGroup>,

    #[serde(default)]
    pub no_comments: i64,
    pub comments: Option<Vec<Comment>>,
    pub comments_next: Option<String>,

    // Viewer state, only present for authenticated requests
    pub user_voted: Option<bool>,
    pub user_voted_up: Option<bool>,
    #[serde(default)]
    pub is_author_muted: bool,
    #[serde(default)]
    pub is_community_muted: bool,

    pub community: Option<Community>,
    pub author: Option<User>,
}

impl Post {
    /// Deletion state, or an error if `deletedAt`/`deletedAs` disagree.
    pub fn deletion(&self) -> Result<Option<Deletion>> {
        deletion_state(self.deleted_at, self.deleted_as)
    }

    /// Upvotes minus downvotes.
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Target of a link post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub hostname: String,
    pub image: Option<Image>,
}

/// One page of a post feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Cursor for the following page; `None` on the last page.
    pub next: Option<String>,
}
