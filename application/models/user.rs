use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier issued by the auth backend.
pub type UserId = String;

/// The identity resolved from the caller's session token.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Profile row stored in the backend, one-to-one with an auth identity.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
