//! PostgreSQL implementation of BookRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookworm_core::{Book, BookRepository, RepoResult, Snowflake};

use crate::mappers::BookInsert;
use crate::models::BookModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookRepository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Book>> {
        let result = sqlx::query_as::<_, BookModel>(
            r"
            SELECT id, title, synopsis, cover_image, author_id, created_at
            FROM books
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, title_contains: Option<&str>) -> RepoResult<Vec<Book>> {
        // strpos keeps '%' and '_' in the query literal
        let results = sqlx::query_as::<_, BookModel>(
            r"
            SELECT id, title, synopsis, cover_image, author_id, created_at
            FROM books
            WHERE $1::TEXT IS NULL OR strpos(lower(title), lower($1)) > 0
            ORDER BY id
            ",
        )
        .bind(title_contains)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Book>> {
        let results = sqlx::query_as::<_, BookModel>(
            r"
            SELECT id, title, synopsis, cover_image, author_id, created_at
            FROM books
            WHERE author_id = $1
            ORDER BY id
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self, book), fields(book_id = %book.id))]
    async fn create(&self, book: &Book) -> RepoResult<()> {
        let insert = BookInsert::new(book);

        sqlx::query(
            r"
            INSERT INTO books (id, title, synopsis, cover_image, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(insert.id)
        .bind(insert.title)
        .bind(insert.synopsis)
        .bind(insert.cover_image)
        .bind(insert.author_id)
        .bind(book.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
