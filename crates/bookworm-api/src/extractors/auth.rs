//! Authentication extractor
//!
//! Turns a bearer token into the explicit [`Actor`] passed to mutating
//! service calls. The token's subject must name a stored user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use bookworm_core::{Actor, Snowflake};
use bookworm_service::ServiceError;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Snowflake,
}

impl AuthUser {
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }

    /// The caller as a service-layer actor
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::from(e)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::from(e)
        })?;

        // Tokens for accounts this store does not know are not sessions
        let known = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ServiceError::from)?
            .is_some();
        if !known {
            tracing::warn!(user_id = %user_id, "Token subject is not a known user");
            return Err(ServiceError::Unauthenticated.into());
        }

        Ok(AuthUser::new(user_id))
    }
}
