//! Chapter entity <-> model mapper

use bookworm_core::{Chapter, Snowflake};

use crate::models::ChapterModel;

impl From<ChapterModel> for Chapter {
    fn from(model: ChapterModel) -> Self {
        Chapter {
            id: Snowflake::new(model.id),
            book_id: Snowflake::new(model.book_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

pub struct ChapterInsert<'a> {
    pub id: i64,
    pub book_id: i64,
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> ChapterInsert<'a> {
    pub fn new(chapter: &'a Chapter) -> Self {
        Self {
            id: chapter.id.into_inner(),
            book_id: chapter.book_id.into_inner(),
            title: &chapter.title,
            content: &chapter.content,
        }
    }
}
