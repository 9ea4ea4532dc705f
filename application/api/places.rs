use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::shop::Shop;
use crate::places::PlaceDirectory;
use crate::repository::Repository;

#[derive(Serialize)]
pub struct ShopResponse {
    shop: Shop,
}

/// Read-only proxy of public place data. No session required; the only gate
/// is the server-held provider key.
pub async fn place_details<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    Path(place_id): Path<String>,
) -> AppResult<Json<ShopResponse>> {
    let places = state
        .places
        .as_ref()
        .ok_or(AppError::Configuration("places provider key"))?;

    let envelope = places.fetch_details(&place_id).await?;
    let details = envelope.into_result()?;

    Ok(Json(ShopResponse {
        shop: details.into_shop(),
    }))
}
