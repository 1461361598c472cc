//! Comment entity <-> model mapper

use bookworm_core::{Comment, CommentWithAuthor, DomainError, Snowflake};

use super::target_from_columns;
use crate::models::{CommentModel, CommentThreadRow};

impl TryFrom<CommentModel> for Comment {
    type Error = DomainError;

    fn try_from(model: CommentModel) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: Snowflake::new(model.id),
            target: target_from_columns(&model.target_kind, model.target_id)?,
            author_id: Snowflake::new(model.author_id),
            content: model.content,
            likes: model.likes,
            dislikes: model.dislikes,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<CommentThreadRow> for CommentWithAuthor {
    type Error = DomainError;

    fn try_from(row: CommentThreadRow) -> Result<Self, Self::Error> {
        Ok(CommentWithAuthor {
            comment: Comment::try_from(row.comment)?,
            author_username: row.author_username,
        })
    }
}

/// Comment fields as bind parameters
pub struct CommentInsert<'a> {
    pub id: i64,
    pub target_kind: &'static str,
    pub target_id: i64,
    pub author_id: i64,
    pub content: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            target_kind: comment.target.kind.as_str(),
            target_id: comment.target.id.into_inner(),
            author_id: comment.author_id.into_inner(),
            content: &comment.content,
        }
    }
}
