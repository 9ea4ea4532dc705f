use crate::error::AppResult;
use crate::models::user::{AuthenticatedUser, UserId};

#[async_trait::async_trait]
pub trait IdentityRepository {
    /// Resolve the user behind a session bearer token. An invalid or expired
    /// token is `Ok(None)`, not an error.
    async fn get_session_user(&self, bearer_token: &str)
        -> AppResult<Option<AuthenticatedUser>>;

    /// Remove the auth identity itself. Must only run after the profile row
    /// is gone.
    async fn delete_identity(&self, user_id: &UserId) -> AppResult<()>;
}
