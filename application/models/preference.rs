use serde::{Deserialize, Serialize};

use crate::models::user::UserId;

/// Drink preference row, zero-or-one per user. Its presence is what marks
/// onboarding as complete.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DrinkPreference {
    pub user_id: UserId,
    #[serde(default)]
    pub favorite_drink: Option<String>,
    #[serde(default)]
    pub milk: Option<String>,
    #[serde(default)]
    pub sweetness: Option<String>,
}
