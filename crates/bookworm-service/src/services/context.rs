//! Service context - dependency container for services
//!
//! Holds the repositories, token verifier, ID generator, media resolver and
//! reader settings every service needs.

use std::sync::Arc;

use bookworm_common::{AppConfig, JwtService};
use bookworm_core::{
    BookRepository, ChapterRepository, CommentRepository, ReactionRepository, Snowflake,
    SnowflakeGenerator, UserRepository,
};
use bookworm_db::{
    InMemoryStore, PgBookRepository, PgChapterRepository, PgCommentRepository, PgPool,
    PgReactionRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::media::MediaResolver;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    /// Present when backed by PostgreSQL; used by readiness probes
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    book_repo: Arc<dyn BookRepository>,
    chapter_repo: Arc<dyn ChapterRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    media: Arc<MediaResolver>,
    external_reader_base: Option<String>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn book_repo(&self) -> &dyn BookRepository {
        self.book_repo.as_ref()
    }

    pub fn chapter_repo(&self) -> &dyn ChapterRepository {
        self.chapter_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn media(&self) -> &MediaResolver {
        self.media.as_ref()
    }

    /// Base URL for external chapter links, if configured
    pub fn external_reader_base(&self) -> Option<&str> {
        self.external_reader_base.as_deref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("media", &self.media)
            .field("external_reader_base", &self.external_reader_base)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    book_repo: Option<Arc<dyn BookRepository>>,
    chapter_repo: Option<Arc<dyn ChapterRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    media: Option<MediaResolver>,
    external_reader_base: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use PostgreSQL repositories sharing one pool
    pub fn postgres(mut self, pool: PgPool) -> Self {
        self.user_repo = Some(Arc::new(PgUserRepository::new(pool.clone())));
        self.book_repo = Some(Arc::new(PgBookRepository::new(pool.clone())));
        self.chapter_repo = Some(Arc::new(PgChapterRepository::new(pool.clone())));
        self.comment_repo = Some(Arc::new(PgCommentRepository::new(pool.clone())));
        self.reaction_repo = Some(Arc::new(PgReactionRepository::new(pool.clone())));
        self.pool = Some(pool);
        self
    }

    /// Use one in-memory store for every repository
    pub fn in_memory(mut self, store: Arc<InMemoryStore>) -> Self {
        self.user_repo = Some(store.clone());
        self.book_repo = Some(store.clone());
        self.chapter_repo = Some(store.clone());
        self.comment_repo = Some(store.clone());
        self.reaction_repo = Some(store);
        self
    }

    /// Apply token, ID, media and reader settings from configuration
    pub fn config(self, config: &AppConfig) -> Self {
        self.jwt_service(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
        .media(MediaResolver::new(
            &config.media.static_root,
            &config.media.static_url,
        ))
        .external_reader_base(config.reader.external_base.clone())
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn book_repo(mut self, repo: Arc<dyn BookRepository>) -> Self {
        self.book_repo = Some(repo);
        self
    }

    pub fn chapter_repo(mut self, repo: Arc<dyn ChapterRepository>) -> Self {
        self.chapter_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn media(mut self, media: MediaResolver) -> Self {
        self.media = Some(media);
        self
    }

    /// Blank values are treated as unset
    pub fn external_reader_base(mut self, base: Option<String>) -> Self {
        self.external_reader_base = base.filter(|b| !b.trim().is_empty());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository or the JWT service
    /// is missing. The ID generator and media resolver fall back to defaults.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: self.pool,
            user_repo: required(self.user_repo, "user_repo")?,
            book_repo: required(self.book_repo, "book_repo")?,
            chapter_repo: required(self.chapter_repo, "chapter_repo")?,
            comment_repo: required(self.comment_repo, "comment_repo")?,
            reaction_repo: required(self.reaction_repo, "reaction_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
            media: Arc::new(self.media.unwrap_or_default()),
            external_reader_base: self.external_reader_base,
        })
    }
}
