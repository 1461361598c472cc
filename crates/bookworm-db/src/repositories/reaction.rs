//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bookworm_core::{Reaction, ReactionRepository, Reactor, RepoResult, Target};

use crate::mappers::ReactionInsert;
use crate::models::{ReactionModel, ReactorRow};

use super::error::{collect_rows, map_db_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    /// Single-statement upsert on the `(user_id, target_kind, target_id)`
    /// unique key. Concurrent writers for the same pair serialize on the row;
    /// the last one wins. An existing row keeps its ID and `created_at`.
    #[instrument(skip(self, reaction), fields(user_id = %reaction.user_id, target = %reaction.target))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        let insert = ReactionInsert::new(reaction);

        let stored = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO reactions (id, user_id, target_kind, target_id, kind, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, target_kind, target_id)
            DO UPDATE SET kind = EXCLUDED.kind, updated_at = EXCLUDED.updated_at
            RETURNING id, user_id, target_kind, target_id, kind, created_at, updated_at
            ",
        )
        .bind(insert.id)
        .bind(insert.user_id)
        .bind(insert.target_kind)
        .bind(insert.target_id)
        .bind(insert.kind)
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Reaction::try_from(stored)
    }

    #[instrument(skip(self), fields(target = %target))]
    async fn find_reactors(&self, target: Target) -> RepoResult<Vec<Reactor>> {
        let rows = sqlx::query_as::<_, ReactorRow>(
            r"
            SELECT r.user_id, u.username, r.kind
            FROM reactions r
            JOIN users u ON u.id = r.user_id
            WHERE r.target_kind = $1 AND r.target_id = $2
            ORDER BY r.id
            ",
        )
        .bind(target.kind.as_str())
        .bind(target.id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        collect_rows(rows)
    }
}
