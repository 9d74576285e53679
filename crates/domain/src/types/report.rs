//! Moderation reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, Deletion, Post, TargetType};
use crate::errors::Result;

/// A report filed against a post or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub community_id: String,
    pub post_id: Option<String>,
    pub reason: String,
    pub description: Option<String>,
    pub reason_id: i64,
    pub target_id: String,
    pub action_taken: Option<String>,
    pub dealt_at: Option<DateTime<Utc>>,
    pub dealt_by: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub target: ReportTarget,
}

/// The reported entity, keyed by the report's `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "lowercase")]
pub enum ReportTarget {
    Post(Box<Post>),
    Comment(Box<Comment>),
}

impl ReportTarget {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Post(_) => TargetType::Post,
            Self::Comment(_) => TargetType::Comment,
        }
    }

    /// Deletion state of the reported entity.
    pub fn deletion(&self) -> Result<Option<Deletion>> {
        match self {
            Self::Post(post) => post.deletion(),
            Self::Comment(comment) => comment.deletion(),
        }
    }
}
