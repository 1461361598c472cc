//! Book entity <-> model mapper

use bookworm_core::{Book, Snowflake};

use crate::models::BookModel;

impl From<BookModel> for Book {
    fn from(model: BookModel) -> Self {
        Book {
            id: Snowflake::new(model.id),
            title: model.title,
            synopsis: model.synopsis,
            cover_image: model.cover_image,
            author_id: Snowflake::new(model.author_id),
            created_at: model.created_at,
        }
    }
}

/// Book fields as bind parameters
pub struct BookInsert<'a> {
    pub id: i64,
    pub title: &'a str,
    pub synopsis: &'a str,
    pub cover_image: Option<&'a str>,
    pub author_id: i64,
}

impl<'a> BookInsert<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self {
            id: book.id.into_inner(),
            title: &book.title,
            synopsis: &book.synopsis,
            cover_image: book.cover_image.as_deref(),
            author_id: book.author_id.into_inner(),
        }
    }
}
