//! User entity <-> model mapper

use bookworm_core::{Snowflake, User};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            created_at: model.created_at,
        }
    }
}

pub struct UserInsert<'a> {
    pub id: i64,
    pub username: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            username: &user.username,
        }
    }
}
