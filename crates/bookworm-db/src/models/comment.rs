//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub target_kind: String,
    pub target_id: i64,
    pub author_id: i64,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment row joined with the author's username
#[derive(Debug, Clone, FromRow)]
pub struct CommentThreadRow {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub author_username: String,
}
