//! Chapter service
//!
//! Chapters have no explicit position. Within a book they are ordered by ID,
//! and IDs come from the Snowflake generator, so a new chapter is always the
//! last one.

use bookworm_core::{Actor, Chapter, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ChapterResponse, CreateChapterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Adjacent chapters of the same book
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterNeighbors {
    pub previous: Option<Chapter>,
    pub next: Option<Chapter>,
}

/// Chapter service
pub struct ChapterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChapterService<'a> {
    /// Create a new ChapterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn get_chapter(&self, chapter_id: Snowflake) -> ServiceResult<Chapter> {
        self.ctx
            .chapter_repo()
            .find_by_id(chapter_id)
            .await?
            .ok_or_else(|| DomainError::ChapterNotFound(chapter_id).into())
    }

    /// Previous and next chapter within the chapter's book; no wraparound
    #[instrument(skip(self))]
    pub async fn neighbors(&self, chapter_id: Snowflake) -> ServiceResult<ChapterNeighbors> {
        let chapter = self.get_chapter(chapter_id).await?;
        self.neighbors_of(&chapter).await
    }

    pub(crate) async fn neighbors_of(&self, chapter: &Chapter) -> ServiceResult<ChapterNeighbors> {
        let repo = self.ctx.chapter_repo();
        let previous = repo.find_previous(chapter.book_id, chapter.id).await?;
        let next = repo.find_next(chapter.book_id, chapter.id).await?;
        Ok(ChapterNeighbors { previous, next })
    }

    /// Append a chapter to a book the actor wrote
    #[instrument(skip(self, request))]
    pub async fn create_chapter(
        &self,
        actor: Actor,
        book_id: Snowflake,
        request: CreateChapterRequest,
    ) -> ServiceResult<ChapterResponse> {
        let book = self
            .ctx
            .book_repo()
            .find_by_id(book_id)
            .await?
            .ok_or(DomainError::BookNotFound(book_id))?;

        if !book.is_authored_by(actor.user_id) {
            return Err(DomainError::NotBookAuthor.into());
        }

        let title = request.title.trim();
        if title.is_empty() {
            return Err(ServiceError::validation("Chapter title cannot be empty"));
        }
        if request.content.trim().is_empty() {
            return Err(ServiceError::validation("Chapter content cannot be empty"));
        }

        let chapter = Chapter::new(
            self.ctx.generate_id(),
            book.id,
            title.to_string(),
            request.content,
        );
        self.ctx.chapter_repo().create(&chapter).await?;

        info!(
            chapter_id = %chapter.id,
            book_id = %book.id,
            author_id = %actor.user_id,
            "Chapter created"
        );

        Ok(ChapterResponse::from(chapter))
    }
}
