use axum::body::Body;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::app_state::AppState;
use crate::auth::CurrentUser;
use crate::places::PlaceDirectory;
use crate::repository::Repository;

/// Resolves the caller's identity once per request and stashes it in the
/// request extensions. Never rejects on its own: unauthenticated routes stay
/// reachable, and protected handlers decide for themselves via the
/// [`CurrentUser`] extractors.
pub async fn session_resolver<R: Repository, P: PlaceDirectory>(
    State(state): State<AppState<R, P>>,
    mut request: Request<Body>,
    next: Next<Body>,
) -> Response {
    let user = match (state.repository.as_ref(), bearer_token(&request)) {
        (Some(repository), Some(token)) => match repository.get_session_user(token).await {
            Ok(user) => user,
            Err(err) => {
                let error_message = err.to_string();
                warn!(error_message, "session resolution failed");
                None
            }
        },
        _ => None,
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

fn bearer_token<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
