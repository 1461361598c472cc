//! Reaction entity <-> model mapper

use bookworm_core::{DomainError, Reaction, ReactionKind, Reactor, Snowflake};

use super::target_from_columns;
use crate::models::{ReactionModel, ReactorRow};

fn parse_kind(kind: &str) -> Result<ReactionKind, DomainError> {
    kind.parse()
        .map_err(|e| DomainError::DatabaseError(format!("corrupt row: {e}")))
}

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            target: target_from_columns(&model.target_kind, model.target_id)?,
            kind: parse_kind(&model.kind)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<ReactorRow> for Reactor {
    type Error = DomainError;

    fn try_from(row: ReactorRow) -> Result<Self, Self::Error> {
        Ok(Reactor {
            user_id: Snowflake::new(row.user_id),
            username: row.username,
            kind: parse_kind(&row.kind)?,
        })
    }
}

/// Reaction fields as bind parameters
pub struct ReactionInsert {
    pub id: i64,
    pub user_id: i64,
    pub target_kind: &'static str,
    pub target_id: i64,
    pub kind: &'static str,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.into_inner(),
            user_id: reaction.user_id.into_inner(),
            target_kind: reaction.target.kind.as_str(),
            target_id: reaction.target.id.into_inner(),
            kind: reaction.kind.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactor_from_row() {
        let row = ReactorRow {
            user_id: 2,
            username: "ann".to_string(),
            kind: "dislike".to_string(),
        };
        let reactor = Reactor::try_from(row).unwrap();
        assert_eq!(reactor.kind, ReactionKind::Dislike);
        assert_eq!(reactor.user_id, Snowflake::new(2));
    }

    #[test]
    fn test_corrupt_kind_rejected() {
        let row = ReactorRow {
            user_id: 2,
            username: "ann".to_string(),
            kind: "meh".to_string(),
        };
        assert!(Reactor::try_from(row).is_err());
    }
}
