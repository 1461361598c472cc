//! Chapter database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ChapterModel {
    pub id: i64,
    pub book_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
