//! Actor - the authenticated user performing a mutation

use serde::{Deserialize, Serialize};

use super::Snowflake;

/// Identity of the caller, passed explicitly into every mutating operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: Snowflake,
}

impl Actor {
    pub const fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }

    /// Check whether this actor is the given user
    #[inline]
    pub fn is(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}
