//! Chapter entity
//!
//! Chapters are ordered within their book by ascending ID.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: Snowflake,
    pub book_id: Snowflake,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(id: Snowflake, book_id: Snowflake, title: String, content: String) -> Self {
        Self {
            id,
            book_id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}
