//! # bookworm-db
//!
//! Storage layer implementing the repository traits from `bookworm-core`.
//!
//! - PostgreSQL repositories via SQLx (`Pg*Repository`)
//! - Row models with `FromRow` derives and model → entity mappers
//! - Connection pool creation and schema migrations
//! - [`InMemoryStore`], a lock-protected implementation of every repository
//!   used by tests and ephemeral runs
//!
//! ```rust,ignore
//! use bookworm_db::{create_pool, run_migrations, PgBookRepository, PoolConfig};
//!
//! let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//! run_migrations(&pool).await?;
//! let books = PgBookRepository::new(pool);
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgBookRepository, PgChapterRepository, PgCommentRepository, PgReactionRepository,
    PgUserRepository,
};
