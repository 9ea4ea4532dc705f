use serde::{Deserialize, Serialize};

use crate::models::user::UserId;

/// A like relationship. (post_id, user_id) is unique: a user may like a given
/// post at most once.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Like {
    pub post_id: String,
    pub user_id: UserId,
}
