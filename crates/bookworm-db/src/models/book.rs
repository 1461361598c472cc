//! Book database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for books table
#[derive(Debug, Clone, FromRow)]
pub struct BookModel {
    pub id: i64,
    pub title: String,
    pub synopsis: String,
    pub cover_image: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}
