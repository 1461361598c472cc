//! PostgreSQL implementation of ChapterRepository
//!
//! Chapter order within a book is ID order; neighbours are found with an
//! indexed range scan on `(book_id, id)`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookworm_core::{Chapter, ChapterRepository, RepoResult, Snowflake};

use crate::mappers::ChapterInsert;
use crate::models::ChapterModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChapterRepository
#[derive(Clone)]
pub struct PgChapterRepository {
    pool: PgPool,
}

impl PgChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_adjacent(
        &self,
        sql: &'static str,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>> {
        let result = sqlx::query_as::<_, ChapterModel>(sql)
            .bind(book_id.into_inner())
            .bind(chapter_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Chapter::from))
    }
}

#[async_trait]
impl ChapterRepository for PgChapterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chapter>> {
        let result = sqlx::query_as::<_, ChapterModel>(
            r"
            SELECT id, book_id, title, content, created_at
            FROM chapters
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chapter::from))
    }

    #[instrument(skip(self))]
    async fn find_by_book(&self, book_id: Snowflake) -> RepoResult<Vec<Chapter>> {
        let results = sqlx::query_as::<_, ChapterModel>(
            r"
            SELECT id, book_id, title, content, created_at
            FROM chapters
            WHERE book_id = $1
            ORDER BY id
            ",
        )
        .bind(book_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Chapter::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_previous(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>> {
        self.fetch_one_adjacent(
            r"
            SELECT id, book_id, title, content, created_at
            FROM chapters
            WHERE book_id = $1 AND id < $2
            ORDER BY id DESC
            LIMIT 1
            ",
            book_id,
            chapter_id,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn find_next(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>> {
        self.fetch_one_adjacent(
            r"
            SELECT id, book_id, title, content, created_at
            FROM chapters
            WHERE book_id = $1 AND id > $2
            ORDER BY id ASC
            LIMIT 1
            ",
            book_id,
            chapter_id,
        )
        .await
    }

    #[instrument(skip(self, chapter), fields(chapter_id = %chapter.id))]
    async fn create(&self, chapter: &Chapter) -> RepoResult<()> {
        let insert = ChapterInsert::new(chapter);

        sqlx::query(
            r"
            INSERT INTO chapters (id, book_id, title, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(insert.id)
        .bind(insert.book_id)
        .bind(insert.title)
        .bind(insert.content)
        .bind(chapter.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
