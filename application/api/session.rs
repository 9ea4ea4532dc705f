use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::auth::MaybeUser;
use crate::error::{AppError, AppResult};
use crate::models::user::{AuthenticatedUser, Profile};
use crate::places::PlaceDirectory;
use crate::repository::Repository;
use crate::session;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    user: Option<AuthenticatedUser>,
    profile: Option<Profile>,
    onboarding_complete: bool,
}

/// Session bootstrap for the UI. An anonymous caller gets nulls, not an
/// error; profile lookups fail soft for the same reason.
pub async fn session_bootstrap<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    MaybeUser(user): MaybeUser,
) -> AppResult<Json<SessionResponse>> {
    let repository = state
        .repository
        .as_ref()
        .ok_or(AppError::Configuration("storage backend"))?;

    let response = match user {
        None => SessionResponse {
            user: None,
            profile: None,
            onboarding_complete: false,
        },
        Some(user) => {
            let profile = session::fetch_profile(repository, &user.id).await;
            let onboarding_complete = session::onboarding_complete(repository, &user.id).await;

            SessionResponse {
                user: Some(user),
                profile,
                onboarding_complete,
            }
        }
    };

    Ok(Json(response))
}
