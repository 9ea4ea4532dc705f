use crate::error::AppResult;
use crate::models::user::{Profile, UserId};

#[async_trait::async_trait]
pub trait ProfileRepository {
    async fn get_profile(&self, user_id: &UserId) -> AppResult<Option<Profile>>;

    /// Deleting an absent profile succeeds, which is what lets a half-failed
    /// account deletion be retried by reissuing the same request.
    async fn delete_profile(&self, user_id: &UserId) -> AppResult<()>;
}
