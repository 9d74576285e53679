//! Session bootstrap payload (`GET _initial`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Community, User};

/// Everything the server hands out when a session is first established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialResponse {
    #[serde(default)]
    pub report_reasons: Vec<ReportReason>,
    /// Present when the session cookie already belongs to a logged-in user.
    pub user: Option<User>,
    /// Default communities shown to visitors.
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default)]
    pub no_users: i64,
    pub banned_from: Option<Vec<String>>,
    /// Public key for web push subscriptions.
    #[serde(default)]
    pub vapid_public_key: String,
    #[serde(default)]
    pub mutes: Mutes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReason {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mutes {
    #[serde(default)]
    pub community_mutes: Vec<Mute>,
    #[serde(default)]
    pub user_mutes: Vec<Mute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuteType {
    User,
    Community,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mute {
    pub id: String,
    #[serde(rename = "type")]
    pub mute_type: MuteType,
    pub muted_user_id: Option<String>,
    pub muted_community_id: Option<String>,
    pub muted_user: Option<User>,
    pub muted_community: Option<Community>,
    pub created_at: DateTime<Utc>,
}
