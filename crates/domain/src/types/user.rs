//! User profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Community, Image};

/// User profile.
///
/// `email` and the notification preferences are only filled in when the
/// profile belongs to the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub about_me: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub is_admin: bool,
    pub pro_pic: Option<Image>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub no_posts: i64,
    #[serde(default)]
    pub no_comments: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,

    // Preferences
    #[serde(default)]
    pub upvote_notifications_off: bool,
    #[serde(default)]
    pub reply_notifications_off: bool,
    pub home_feed: Option<String>,
    #[serde(default)]
    pub remember_feed_sort: bool,
    #[serde(default)]
    pub embeds_off: bool,
    #[serde(default)]
    pub hide_user_profile_pictures: bool,

    pub banned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub notifications_new_count: i64,
    pub modding_list: Option<Vec<Community>>,
}

/// Profile badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    #[serde(rename = "type")]
    pub badge_type: String,
}
