//! Comment service
//!
//! Threads are listed oldest first. Comment like/dislike tallies are
//! anonymous counters: every call adds one, with no per-user tracking.

use bookworm_core::{Actor, Comment, CommentVote, DomainError, Snowflake, Target};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CommentTallyResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::targets::{require_actor, require_target};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a comment on a book or chapter
    #[instrument(skip(self, request))]
    pub async fn post_comment(
        &self,
        actor: Actor,
        target: Target,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author = require_actor(self.ctx, actor).await?;
        require_target(self.ctx, target).await?;

        if request.content.trim().is_empty() {
            return Err(ServiceError::validation("Comment content cannot be empty"));
        }
        if request.content.chars().count() > Comment::MAX_CONTENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: Comment::MAX_CONTENT_LENGTH,
            }
            .into());
        }

        let comment = Comment::new(self.ctx.generate_id(), target, author.id, request.content);
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            target = %target,
            author_id = %author.id,
            "Comment posted"
        );

        Ok(CommentResponse {
            id: comment.id.to_string(),
            user_id: author.id.to_string(),
            username: author.username,
            content: comment.content,
            likes: comment.likes,
            dislikes: comment.dislikes,
            created_at: comment.created_at,
        })
    }

    /// Comment thread for a target, oldest first
    #[instrument(skip(self))]
    pub async fn thread_for(&self, target: Target) -> ServiceResult<Vec<CommentResponse>> {
        let rows = self.ctx.comment_repo().find_thread(target).await?;
        Ok(rows.iter().map(CommentResponse::from).collect())
    }

    /// Add one like or dislike to a comment's tally
    #[instrument(skip(self))]
    pub async fn increment(
        &self,
        comment_id: Snowflake,
        vote: CommentVote,
    ) -> ServiceResult<CommentTallyResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .increment(comment_id, vote)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        info!(
            comment_id = %comment.id,
            vote = %vote,
            likes = comment.likes,
            dislikes = comment.dislikes,
            "Comment tally incremented"
        );

        Ok(CommentTallyResponse::from(&comment))
    }
}
