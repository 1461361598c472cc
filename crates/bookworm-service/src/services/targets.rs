//! Lookups shared by the reaction and comment services

use bookworm_core::{DomainError, Target, TargetKind, User};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Fail with the matching NotFound unless the book or chapter exists
pub(crate) async fn require_target(ctx: &ServiceContext, target: Target) -> ServiceResult<()> {
    let exists = match target.kind {
        TargetKind::Book => ctx.book_repo().find_by_id(target.id).await?.is_some(),
        TargetKind::Chapter => ctx.chapter_repo().find_by_id(target.id).await?.is_some(),
    };

    if exists {
        Ok(())
    } else {
        Err(DomainError::target_not_found(target).into())
    }
}

/// Load the acting user; an actor with no stored account is unauthenticated
pub(crate) async fn require_actor(
    ctx: &ServiceContext,
    actor: bookworm_core::Actor,
) -> ServiceResult<User> {
    ctx.user_repo()
        .find_by_id(actor.user_id)
        .await?
        .ok_or(ServiceError::Unauthenticated)
}
