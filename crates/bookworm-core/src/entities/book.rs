//! Book entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A book owned by exactly one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Snowflake,
    pub title: String,
    pub synopsis: String,
    /// Stored cover reference: an upload-relative path, an absolute file
    /// path, or an absolute URL. Resolved to a public URL at render time.
    pub cover_image: Option<String>,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Create a new Book
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        synopsis: String,
        cover_image: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            synopsis,
            cover_image,
            author_id,
            created_at: Utc::now(),
        }
    }

    /// Check if the given user wrote this book
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}
