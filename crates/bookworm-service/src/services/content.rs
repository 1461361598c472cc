//! Content views
//!
//! Composes chapter sequencing, reactions, comment threads and media
//! resolution into the read-chapter view and the book-data export.

use bookworm_core::{Snowflake, Target};
use tracing::instrument;

use crate::dto::{
    BookDataChapter, BookDataResponse, ChapterLinkResponse, ChapterResponse, ChapterViewResponse,
    ReactionSummaryResponse,
};

use super::book::BookService;
use super::chapter::ChapterService;
use super::comment::CommentService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::reaction::ReactionService;

/// Read-side composition service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Chapter body with its neighbours, reactions and comment thread
    #[instrument(skip(self))]
    pub async fn read_chapter(&self, chapter_id: Snowflake) -> ServiceResult<ChapterViewResponse> {
        let chapters = ChapterService::new(self.ctx);
        let chapter = chapters.get_chapter(chapter_id).await?;
        let book = BookService::new(self.ctx).find_book(chapter.book_id).await?;
        let neighbors = chapters.neighbors_of(&chapter).await?;

        let target = Target::chapter(chapter.id);
        let reactions = ReactionService::new(self.ctx).summary(target).await?;
        let comments = CommentService::new(self.ctx).thread_for(target).await?;

        Ok(ChapterViewResponse {
            chapter: ChapterResponse::from(chapter),
            book: ChapterLinkResponse::from(&book),
            previous: neighbors.previous.as_ref().map(ChapterLinkResponse::from),
            next: neighbors.next.as_ref().map(ChapterLinkResponse::from),
            reactions: ReactionSummaryResponse::from(reactions),
            comments,
        })
    }

    /// Book metadata, resolved cover and every chapter's content
    ///
    /// Each chapter carries `external_url` when a reader base is configured,
    /// otherwise `null`.
    #[instrument(skip(self))]
    pub async fn book_data(&self, book_id: Snowflake) -> ServiceResult<BookDataResponse> {
        let book = BookService::new(self.ctx).find_book(book_id).await?;
        let chapters = self.ctx.chapter_repo().find_by_book(book.id).await?;
        let base = self.ctx.external_reader_base();

        let chapters = chapters
            .into_iter()
            .map(|chapter| BookDataChapter {
                id: chapter.id.to_string(),
                external_url: base.map(|base| external_chapter_url(base, book.id, chapter.id)),
                title: chapter.title,
                content: chapter.content,
            })
            .collect();

        Ok(BookDataResponse {
            id: book.id.to_string(),
            cover_image: self.ctx.media().resolve(book.cover_image.as_deref()),
            title: book.title,
            synopsis: book.synopsis,
            chapters,
        })
    }
}

/// `{base}/book/{book_id}/chapter/{chapter_id}`
fn external_chapter_url(base: &str, book_id: Snowflake, chapter_id: Snowflake) -> String {
    format!(
        "{}/book/{book_id}/chapter/{chapter_id}",
        base.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        context, context_with_reader, seed_book, seed_chapter, seed_user,
    };
    use bookworm_core::ReactionKind;

    #[test]
    fn test_external_chapter_url() {
        assert_eq!(
            external_chapter_url("https://read.example/", Snowflake::new(1), Snowflake::new(2)),
            "https://read.example/book/1/chapter/2"
        );
    }

    #[tokio::test]
    async fn test_read_chapter_view() {
        let ctx = context();
        let author = seed_user(&ctx, "author").await;
        let book = seed_book(&ctx, author, "Dune").await;
        for id in [5, 7, 9] {
            seed_chapter(&ctx, book.id, Snowflake::new(id), &format!("ch{id}")).await;
        }
        ReactionService::new(&ctx)
            .set_reaction(author, Target::chapter(Snowflake::new(7)), ReactionKind::Like)
            .await
            .unwrap();

        let view = ContentService::new(&ctx)
            .read_chapter(Snowflake::new(7))
            .await
            .unwrap();

        assert_eq!(view.chapter.title, "ch7");
        assert_eq!(view.book.title, "Dune");
        assert_eq!(view.previous.map(|c| c.id), Some("5".to_string()));
        assert_eq!(view.next.map(|c| c.id), Some("9".to_string()));
        assert_eq!(view.reactions.likes, 1);
        assert_eq!(view.reactions.like_users[0].username, "author");
        assert!(view.comments.is_empty());
    }

    #[tokio::test]
    async fn test_book_data_without_reader_base() {
        let ctx = context();
        let author = seed_user(&ctx, "author").await;
        let book = seed_book(&ctx, author, "Dune").await;
        seed_chapter(&ctx, book.id, ctx.generate_id(), "One").await;

        let data = ContentService::new(&ctx).book_data(book.id).await.unwrap();
        assert_eq!(data.cover_image, None);
        assert_eq!(data.chapters.len(), 1);
        assert_eq!(data.chapters[0].external_url, None);

        let json = serde_json::to_value(&data).unwrap();
        assert!(json["chapters"][0]["external_url"].is_null());
    }

    #[tokio::test]
    async fn test_book_data_with_reader_base() {
        let ctx = context_with_reader(Some("https://read.example"));
        let author = seed_user(&ctx, "author").await;
        let book = seed_book(&ctx, author, "Dune").await;
        let chapter = seed_chapter(&ctx, book.id, ctx.generate_id(), "One").await;

        let data = ContentService::new(&ctx).book_data(book.id).await.unwrap();
        assert_eq!(
            data.chapters[0].external_url,
            Some(format!(
                "https://read.example/book/{}/chapter/{}",
                book.id, chapter.id
            ))
        );
    }

    #[tokio::test]
    async fn test_book_data_empty_book() {
        let ctx = context();
        let author = seed_user(&ctx, "author").await;
        let book = seed_book(&ctx, author, "Dune").await;

        let data = ContentService::new(&ctx).book_data(book.id).await.unwrap();
        assert!(data.chapters.is_empty());
        assert_eq!(data.title, "Dune");
    }
}
