use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::account::SuccessResponse;
use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::like::Like;
use crate::models::user::AuthenticatedUser;
use crate::places::PlaceDirectory;
use crate::repository::Repository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    post_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlikeParams {
    post_id: Option<String>,
}

/// Liking twice is a client error: the existence check makes the duplicate
/// visible, and the storage layer's uniqueness constraint backs it up when
/// two likes race.
pub async fn like_post<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    user: AuthenticatedUser,
    body: Option<Json<LikeRequest>>,
) -> AppResult<Json<SuccessResponse>> {
    let repository = state
        .repository
        .as_ref()
        .ok_or(AppError::Configuration("storage backend"))?;

    let post_id = body
        .and_then(|Json(body)| body.post_id)
        .ok_or(AppError::MissingField("postId"))?;

    if repository.like_exists(&post_id, &user.id).await? {
        return Err(AppError::AlreadyLiked);
    }

    let like = Like {
        post_id,
        user_id: user.id,
    };
    repository.insert_like(like).await?;

    Ok(Json(SuccessResponse { success: true }))
}

/// Unliking is idempotent: deleting an absent like reports success, so a
/// double click never surfaces an error. Deliberately asymmetric with
/// [`like_post`].
pub async fn unlike_post<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    user: AuthenticatedUser,
    Query(params): Query<UnlikeParams>,
) -> AppResult<Json<SuccessResponse>> {
    let repository = state
        .repository
        .as_ref()
        .ok_or(AppError::Configuration("storage backend"))?;

    let post_id = params.post_id.ok_or(AppError::MissingField("postId"))?;

    repository.delete_like(&post_id, &user.id).await?;

    Ok(Json(SuccessResponse { success: true }))
}
