//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookworm_core::{
    Comment, CommentRepository, CommentVote, CommentWithAuthor, RepoResult, Snowflake, Target,
};

use crate::mappers::CommentInsert;
use crate::models::{CommentModel, CommentThreadRow};

use super::error::{collect_rows, map_db_error};

const INCREMENT_LIKES: &str = r"
    UPDATE comments SET likes = likes + 1
    WHERE id = $1
    RETURNING id, target_kind, target_id, author_id, content, likes, dislikes, created_at
";

const INCREMENT_DISLIKES: &str = r"
    UPDATE comments SET dislikes = dislikes + 1
    WHERE id = $1
    RETURNING id, target_kind, target_id, author_id, content, likes, dislikes, created_at
";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, target_kind, target_id, author_id, content, likes, dislikes, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Comment::try_from).transpose()
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id, target = %comment.target))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);

        sqlx::query(
            r"
            INSERT INTO comments (id, target_kind, target_id, author_id, content, likes, dislikes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(insert.id)
        .bind(insert.target_kind)
        .bind(insert.target_id)
        .bind(insert.author_id)
        .bind(insert.content)
        .bind(comment.likes)
        .bind(comment.dislikes)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn find_thread(&self, target: Target) -> RepoResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentThreadRow>(
            r"
            SELECT c.id, c.target_kind, c.target_id, c.author_id, c.content,
                   c.likes, c.dislikes, c.created_at, u.username AS author_username
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.target_kind = $1 AND c.target_id = $2
            ORDER BY c.id
            ",
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }

    #[instrument(skip(self))]
    async fn increment(&self, id: Snowflake, vote: CommentVote) -> RepoResult<Option<Comment>> {
        let sql = match vote {
            CommentVote::Like => INCREMENT_LIKES,
            CommentVote::Dislike => INCREMENT_DISLIKES,
        };

        let result = sqlx::query_as::<_, CommentModel>(sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Comment::try_from).transpose()
    }
}
