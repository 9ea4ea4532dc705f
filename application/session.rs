//! Profile lookups used for UI-gating decisions.
//!
//! Unlike the mutation handlers, these swallow storage errors and answer
//! "absent" instead: a broken backend should degrade the UI, not fail it.

use tracing::error;

use crate::models::user::{Profile, UserId};
use crate::repository::Repository;

/// The stored profile for a user, or `None` on absence *and* on storage
/// failure (logged, not propagated).
pub async fn fetch_profile<R: Repository>(repository: &R, user_id: &UserId) -> Option<Profile> {
    match repository.get_profile(user_id).await {
        Ok(profile) => profile,
        Err(err) => {
            let error_message = err.to_string();
            error!(error_message, user_id = %user_id, "failed to load profile");
            None
        }
    }
}

/// True iff the user has both a profile and a drink-preference row. Absence
/// of either yields false, never an error.
pub async fn onboarding_complete<R: Repository>(repository: &R, user_id: &UserId) -> bool {
    if fetch_profile(repository, user_id).await.is_none() {
        return false;
    }

    match repository.get_drink_preference(user_id).await {
        Ok(preference) => preference.is_some(),
        Err(err) => {
            let error_message = err.to_string();
            error!(error_message, user_id = %user_id, "failed to load drink preference");
            false
        }
    }
}
