use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::app_state::AppState;
use crate::auth::MaybeUser;
use crate::error::{AppError, AppResult};
use crate::places::PlaceDirectory;
use crate::repository::Repository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Removes an account: first the profile row, then the auth identity.
///
/// The two deletions span separate external systems with no transaction, so
/// ordering carries the guarantee: a failed profile delete stops the request
/// before the identity is touched, and the reverse window (profile gone,
/// identity alive) is recovered by reissuing the request.
pub async fn delete_account<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    MaybeUser(user): MaybeUser,
    body: Option<Json<DeleteAccountRequest>>,
) -> AppResult<Json<SuccessResponse>> {
    let repository = state
        .repository
        .as_ref()
        .ok_or(AppError::Configuration("storage backend"))?;

    let user_id = body
        .and_then(|Json(body)| body.user_id)
        .ok_or(AppError::MissingField("userId"))?;

    let caller = user.ok_or(AppError::Unauthenticated)?;
    if caller.id != user_id {
        warn!(
            caller_id = %caller.id,
            user_id = %user_id,
            "refused account deletion for another user"
        );
        return Err(AppError::Forbidden);
    }

    repository.delete_profile(&user_id).await?;
    repository.delete_identity(&user_id).await?;

    info!(user_id = %user_id, "account deleted");
    Ok(Json(SuccessResponse { success: true }))
}
