use crate::error::AppResult;
use crate::models::preference::DrinkPreference;
use crate::models::user::UserId;

#[async_trait::async_trait]
pub trait PreferenceRepository {
    /// Zero-or-one row per user; absence is not an error.
    async fn get_drink_preference(&self, user_id: &UserId)
        -> AppResult<Option<DrinkPreference>>;
}
