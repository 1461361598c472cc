//! User service
//!
//! Profiles are read-only here; accounts are created by the identity service.

use bookworm_core::{Actor, DomainError, Snowflake};
use tracing::instrument;

use crate::dto::{ProfileResponse, UserResponse};

use super::book::BookService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::targets::require_actor;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public profile: the user and the books they wrote
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let books = BookService::new(self.ctx).books_by_author(&user).await?;
        Ok(ProfileResponse {
            user: UserResponse::from(user),
            books,
        })
    }

    /// The actor's own books
    #[instrument(skip(self))]
    pub async fn dashboard(&self, actor: Actor) -> ServiceResult<ProfileResponse> {
        let user = require_actor(self.ctx, actor).await?;
        let books = BookService::new(self.ctx).books_by_author(&user).await?;
        Ok(ProfileResponse {
            user: UserResponse::from(user),
            books,
        })
    }
}
