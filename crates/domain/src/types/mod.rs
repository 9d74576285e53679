//! Domain types and models
//!
//! Every struct here mirrors a JSON payload of the API. Field names are
//! camelCase on the wire and snake_case in Rust.

pub mod comment;
pub mod community;
pub mod image;
pub mod initial;
pub mod list;
pub mod notification;
pub mod post;
pub mod report;
pub mod requests;
pub mod user;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use comment::{Comment, CommentsPage};
pub use community::{Community, CommunityRule, ReportDetails};
pub use image::{Image, ImageCopy};
pub use initial::{InitialResponse, Mute, MuteType, Mutes, ReportReason};
pub use list::List;
pub use notification::{
    CommentNotif, DeletedPostNotif, ModAddNotif, NewBadgeNotif, NewVotesNotif, Notification,
    NotificationContent, NotificationsPage,
};
pub use post::{Link, Post, PostsPage};
pub use report::{Report, ReportTarget};
pub use requests::{
    CommentVote, Feed, LoginRequest, NewComment, NewPost, PostSort, PostVote, PostsQuery,
    UpdateComment, UpdatePost,
};
pub use user::{Badge, User};

use crate::errors::{DiscuitError, Result};

// ============================================================================
// Shared enums
// ============================================================================

/// Capacity a user acts in: as themselves, as a moderator, or as an admin.
///
/// Shared by `userGroup`, `deletedAs`, `lockedAs` and friends. Deleting
/// "as mods" is a different action from deleting as the author, so this is
/// never collapsed into a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserGroup {
    #[default]
    Normal,
    Mods,
    Admins,
}

crate::impl_wire_str_conversions!(UserGroup {
    Normal => "normal",
    Mods => "mods",
    Admins => "admins",
});

/// Kind of post content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Text,
    Image,
    Link,
}

crate::impl_wire_str_conversions!(PostType {
    Text => "text",
    Image => "image",
    Link => "link",
});

/// Whether a vote, report or notification refers to a post or a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Post,
    Comment,
}

crate::impl_wire_str_conversions!(TargetType {
    Post => "post",
    Comment => "comment",
});

// ============================================================================
// Deletion state
// ============================================================================

/// A deleted entity: when it was deleted and in which capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    pub at: DateTime<Utc>,
    pub as_group: UserGroup,
}

/// Combine a `deletedAt`/`deletedAs` pair into a single state.
///
/// Both null means not deleted, both set means deleted. A half-set pair is
/// rejected.
pub fn deletion_state(
    deleted_at: Option<DateTime<Utc>>,
    deleted_as: Option<UserGroup>,
) -> Result<Option<Deletion>> {
    match (deleted_at, deleted_as) {
        (None, None) => Ok(None),
        (Some(at), Some(as_group)) => Ok(Some(Deletion { at, as_group })),
        (Some(at), None) => Err(DiscuitError::InvalidInput(format!(
            "deletedAt is {at} but deletedAs is missing"
        ))),
        (None, Some(as_group)) => Err(DiscuitError::InvalidInput(format!(
            "deletedAs is {as_group} but deletedAt is missing"
        ))),
    }
}
