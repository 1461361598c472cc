//! Book service
//!
//! Book creation, search and the book page. Cover references are stored as
//! given and resolved to a URL only when rendered.

use std::collections::HashMap;

use bookworm_core::{Actor, Book, DomainError, Snowflake, Target, User};
use tracing::{info, instrument};

use crate::dto::{
    BookResponse, BookSummaryResponse, ChapterLinkResponse, CreateBookRequest,
    ReactionSummaryResponse, UserResponse,
};

use super::comment::CommentService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reaction::ReactionService;
use super::targets::require_actor;

/// Book service
pub struct BookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookService<'a> {
    /// Create a new BookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a book owned by the actor
    #[instrument(skip(self, request))]
    pub async fn create_book(
        &self,
        actor: Actor,
        request: CreateBookRequest,
    ) -> ServiceResult<BookSummaryResponse> {
        let author = require_actor(self.ctx, actor).await?;

        let title = request.title.trim();
        if title.is_empty() {
            return Err(ServiceError::validation("Book title cannot be empty"));
        }
        if request.synopsis.trim().is_empty() {
            return Err(ServiceError::validation("Synopsis cannot be empty"));
        }

        let cover_image = request
            .cover_image
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let book = Book::new(
            self.ctx.generate_id(),
            author.id,
            title.to_string(),
            request.synopsis,
            cover_image,
        );
        self.ctx.book_repo().create(&book).await?;

        info!(book_id = %book.id, author_id = %author.id, "Book created");

        Ok(self.summary(&book, author.username))
    }

    /// All books, or those whose title contains `query` (case-insensitive)
    #[instrument(skip(self))]
    pub async fn list_books(&self, query: Option<&str>) -> ServiceResult<Vec<BookSummaryResponse>> {
        let books = self.ctx.book_repo().list(query).await?;

        let mut usernames: HashMap<Snowflake, String> = HashMap::new();
        let mut summaries = Vec::with_capacity(books.len());
        for book in &books {
            let username = match usernames.get(&book.author_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self.author_of(book).await?.username;
                    usernames.insert(book.author_id, name.clone());
                    name
                }
            };
            summaries.push(self.summary(book, username));
        }

        Ok(summaries)
    }

    /// Books written by a user, in creation order
    #[instrument(skip(self))]
    pub async fn books_by_author(&self, author: &User) -> ServiceResult<Vec<BookSummaryResponse>> {
        let books = self.ctx.book_repo().find_by_author(author.id).await?;
        Ok(books
            .iter()
            .map(|book| self.summary(book, author.username.clone()))
            .collect())
    }

    /// Book page: metadata, chapter index, reactions and comments
    #[instrument(skip(self))]
    pub async fn get_book(&self, book_id: Snowflake) -> ServiceResult<BookResponse> {
        let book = self.find_book(book_id).await?;
        let author = self.author_of(&book).await?;
        let target = Target::book(book.id);

        let chapters = self.ctx.chapter_repo().find_by_book(book.id).await?;
        let reactions = ReactionService::new(self.ctx).summary(target).await?;
        let comments = CommentService::new(self.ctx).thread_for(target).await?;

        Ok(BookResponse {
            id: book.id.to_string(),
            cover_url: self.ctx.media().resolve(book.cover_image.as_deref()),
            title: book.title,
            synopsis: book.synopsis,
            author: UserResponse::from(author),
            chapters: chapters.iter().map(ChapterLinkResponse::from).collect(),
            reactions: ReactionSummaryResponse::from(reactions),
            comments,
            created_at: book.created_at,
        })
    }

    pub(crate) async fn find_book(&self, book_id: Snowflake) -> ServiceResult<Book> {
        self.ctx
            .book_repo()
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| DomainError::BookNotFound(book_id).into())
    }

    async fn author_of(&self, book: &Book) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(book.author_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(book.author_id).into())
    }

    fn summary(&self, book: &Book, author_username: String) -> BookSummaryResponse {
        let cover_url = self.ctx.media().resolve(book.cover_image.as_deref());
        BookSummaryResponse::from_book(book, author_username, cover_url)
    }
}
