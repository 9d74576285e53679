//! User-curated lists of posts and comments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: i64,
    pub user_id: String,
    pub username: String,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub num_items: i64,
    pub sort: String,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}
