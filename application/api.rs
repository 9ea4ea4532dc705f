mod account;
mod likes;
mod places;
mod session;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::api::account::delete_account;
use crate::api::likes::{like_post, unlike_post};
use crate::api::places::place_details;
use crate::api::session::session_bootstrap;
use crate::app_state::AppState;
use crate::auth::session_resolver;
use crate::places::PlaceDirectory;
use crate::repository::Repository;

pub fn build_router<R: Repository, P: PlaceDirectory>(state: AppState<R, P>) -> Router {
    Router::new()
        .route("/delete-account", post(delete_account::<R, P>))
        .route(
            "/likes",
            post(like_post::<R, P>).delete(unlike_post::<R, P>),
        )
        .route("/places/:place_id", get(place_details::<R, P>))
        .route("/session", get(session_bootstrap::<R, P>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_resolver::<R, P>,
        ))
        .with_state(state)
}
