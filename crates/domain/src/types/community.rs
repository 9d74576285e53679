//! Community records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Image, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub nsfw: bool,
    pub about: Option<String>,
    #[serde(default)]
    pub no_members: i64,
    pub pro_pic: Option<Image>,
    pub banner_image: Option<Image>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub user_joined: Option<bool>,
    pub user_mod: Option<bool>,
    #[serde(default)]
    pub is_muted: bool,
    pub mods: Option<Vec<User>>,
    pub rules: Option<Vec<CommunityRule>>,
    #[serde(rename = "ReportDetails")]
    pub report_details: Option<ReportDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRule {
    pub id: i64,
    pub rule: String,
    pub description: Option<String>,
    pub community_id: String,
    #[serde(default)]
    pub z_index: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Open report counts, visible to moderators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub no_reports: i64,
    pub no_post_reports: i64,
    pub no_comment_reports: i64,
}
