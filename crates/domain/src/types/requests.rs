//! Request payloads and feed query options
//!
//! These are the bodies the client serializes before sending; the server
//! never returns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PostType;
use crate::constants::DEFAULT_FEED_LIMIT;
use crate::errors::{DiscuitError, Result};

// ============================================================================
// Feed queries
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    #[default]
    Home,
    All,
    Community,
}

crate::impl_wire_str_conversions!(Feed {
    Home => "home",
    All => "all",
    Community => "community",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSort {
    #[default]
    Latest,
    Hot,
    Activity,
    Day,
    Week,
    Month,
    Year,
    All,
}

crate::impl_wire_str_conversions!(PostSort {
    Latest => "latest",
    Hot => "hot",
    Activity => "activity",
    Day => "day",
    Week => "week",
    Month => "month",
    Year => "year",
    All => "all",
});

/// Options for `GET posts`.
///
/// Defaults to the home feed, newest first, ten posts per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsQuery {
    pub feed: Feed,
    pub sort: PostSort,
    pub limit: u32,
    pub community_id: Option<String>,
    pub next: Option<String>,
}

impl Default for PostsQuery {
    fn default() -> Self {
        Self {
            feed: Feed::default(),
            sort: PostSort::default(),
            limit: DEFAULT_FEED_LIMIT,
            community_id: None,
            next: None,
        }
    }
}

impl PostsQuery {
    pub fn feed(mut self, feed: Feed) -> Self {
        self.feed = feed;
        self
    }

    pub fn sort(mut self, sort: PostSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict to one community; also switches the feed to
    /// [`Feed::Community`].
    pub fn community(mut self, community_id: impl Into<String>) -> Self {
        self.feed = Feed::Community;
        self.community_id = Some(community_id.into());
        self
    }

    /// Continue from a cursor returned by a previous page.
    pub fn next(mut self, cursor: impl Into<String>) -> Self {
        self.next = Some(cursor.into());
        self
    }

    /// Query string pairs in the order they are sent.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("feed", self.feed.as_str().to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(community_id) = &self.community_id {
            pairs.push(("communityId", community_id.clone()));
        }
        if let Some(next) = &self.next {
            pairs.push(("next", next.clone()));
        }
        pairs
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Body of `POST posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub title: String,
    /// Name of the community to post in.
    pub community: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// URL for link posts.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Id of a previously uploaded image for image posts.
    #[serde(rename = "imageId", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewPost {
    pub fn text(
        community: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            post_type: PostType::Text,
            title: title.into(),
            community: community.into(),
            body: Some(body.into()),
            link: None,
            image: None,
        }
    }

    pub fn link(
        community: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            post_type: PostType::Link,
            title: title.into(),
            community: community.into(),
            body: None,
            link: Some(url.into()),
            image: None,
        }
    }

    pub fn image(
        community: impl Into<String>,
        title: impl Into<String>,
        image_id: impl Into<String>,
    ) -> Self {
        Self {
            post_type: PostType::Image,
            title: title.into(),
            community: community.into(),
            body: None,
            link: None,
            image: Some(image_id.into()),
        }
    }

    /// Check that link and image posts carry their content.
    ///
    /// An empty string counts as missing.
    ///
    /// # Errors
    /// Returns `DiscuitError::InvalidInput` for a link post without a link
    /// or an image post without an image.
    pub fn validate(&self) -> Result<()> {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());

        match self.post_type {
            PostType::Link if !present(&self.link) => {
                Err(DiscuitError::InvalidInput("link post requires a link".into()))
            }
            PostType::Image if !present(&self.image) => {
                Err(DiscuitError::InvalidInput("image post requires an image".into()))
            }
            _ => Ok(()),
        }
    }
}

/// Body of `PUT posts/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body of `POST _postVote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostVote {
    pub post_id: String,
    pub up: bool,
}

// ============================================================================
// Comments
// ============================================================================

/// Body of `POST posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    /// `None` (sent as `null`) for a top-level comment.
    pub parent_comment_id: Option<String>,
}

/// Body of `PUT posts/{postId}/comments/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateComment {
    pub body: String,
}

/// Body of `POST _commentVote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentVote {
    pub comment_id: String,
    pub up: bool,
}

// ============================================================================
// Auth
// ============================================================================

/// Body of `POST _login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
