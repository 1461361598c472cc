//! Reaction service
//!
//! One like/dislike per (user, target). Setting a reaction creates the row on
//! first use and overwrites its kind afterwards; nothing here removes a row.

use bookworm_core::{Actor, Reaction, ReactionCounts, ReactionKind, Reactor, Target};
use tracing::{info, instrument};

use crate::dto::{ReactionStateResponse, ReactionSummaryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::targets::require_target;

/// Counts and reacting users for one target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionSummary {
    pub counts: ReactionCounts,
    pub like_users: Vec<Reactor>,
    pub dislike_users: Vec<Reactor>,
}

impl ReactionSummary {
    /// Split one reactor snapshot into counts and per-kind user lists
    pub fn from_reactors(reactors: Vec<Reactor>) -> Self {
        let counts = ReactionCounts::from_reactors(&reactors);
        let (like_users, dislike_users): (Vec<_>, Vec<_>) = reactors
            .into_iter()
            .partition(|r| r.kind == ReactionKind::Like);
        Self {
            counts,
            like_users,
            dislike_users,
        }
    }
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set the actor's reaction on a target
    ///
    /// Repeating the same kind is a no-op in effect; a different kind flips
    /// the existing row in place.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        actor: Actor,
        target: Target,
        kind: ReactionKind,
    ) -> ServiceResult<Reaction> {
        require_target(self.ctx, target).await?;

        let candidate = Reaction::new(self.ctx.generate_id(), actor.user_id, target, kind);
        let reaction = self.ctx.reaction_repo().upsert(&candidate).await?;

        info!(
            user_id = %actor.user_id,
            target = %target,
            kind = %reaction.kind,
            reaction_id = %reaction.id,
            "Reaction set"
        );

        Ok(reaction)
    }

    /// Like/dislike totals for a target
    #[instrument(skip(self))]
    pub async fn counts_for(&self, target: Target) -> ServiceResult<ReactionCounts> {
        let reactors = self.ctx.reaction_repo().find_reactors(target).await?;
        Ok(ReactionCounts::from_reactors(&reactors))
    }

    /// Users holding a reaction of `kind`, in reaction order
    #[instrument(skip(self))]
    pub async fn users_who(&self, target: Target, kind: ReactionKind) -> ServiceResult<Vec<Reactor>> {
        let reactors = self.ctx.reaction_repo().find_reactors(target).await?;
        Ok(reactors.into_iter().filter(|r| r.kind == kind).collect())
    }

    /// Counts and both user lists from a single read
    #[instrument(skip(self))]
    pub async fn summary(&self, target: Target) -> ServiceResult<ReactionSummary> {
        let reactors = self.ctx.reaction_repo().find_reactors(target).await?;
        Ok(ReactionSummary::from_reactors(reactors))
    }

    /// Set a reaction and return the target's refreshed summary
    pub async fn react(
        &self,
        actor: Actor,
        target: Target,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionStateResponse> {
        let reaction = self.set_reaction(actor, target, kind).await?;
        let summary = self.summary(target).await?;

        Ok(ReactionStateResponse {
            target_kind: target.kind.to_string(),
            target_id: target.id.to_string(),
            kind: reaction.kind,
            summary: ReactionSummaryResponse::from(summary),
        })
    }
}
