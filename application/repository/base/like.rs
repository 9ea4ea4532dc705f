use crate::error::AppResult;
use crate::models::like::Like;
use crate::models::user::UserId;

#[async_trait::async_trait]
pub trait LikeRepository {
    async fn like_exists(&self, post_id: &str, user_id: &UserId) -> AppResult<bool>;
    async fn insert_like(&self, like: Like) -> AppResult<()>;

    /// Unconditional delete; removing an absent like is a no-op.
    async fn delete_like(&self, post_id: &str, user_id: &UserId) -> AppResult<()>;
}
