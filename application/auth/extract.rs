use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::models::user::AuthenticatedUser;

/// The per-request identity as resolved by the session middleware.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

/// Extractor for handlers that work with or without a session.
pub struct MaybeUser(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .and_then(|current| current.0.clone());

        Ok(MaybeUser(user))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .and_then(|current| current.0.clone())
            .ok_or(AppError::Unauthenticated)
    }
}
