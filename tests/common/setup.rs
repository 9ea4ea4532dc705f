use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use coffeeconnect::api::build_router;
use coffeeconnect::app_state::AppState;
use coffeeconnect::models::preference::DrinkPreference;
use coffeeconnect::models::user::{AuthenticatedUser, Profile};

use crate::common::memory_repository::MemoryRepository;
use crate::common::places::CannedPlaces;

pub fn build_app(repository: MemoryRepository) -> Router {
    build_router(AppState::<_, CannedPlaces> {
        repository: Some(repository),
        places: None,
    })
}

pub fn build_places_app(places: CannedPlaces) -> Router {
    build_router(AppState {
        repository: Some(MemoryRepository::default()),
        places: Some(places),
    })
}

pub fn build_unconfigured_app() -> Router {
    build_router(AppState::<MemoryRepository, CannedPlaces> {
        repository: None,
        places: None,
    })
}

pub fn test_user(id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: id.to_string(),
        email: Some(format!("{id}@coffeeconnect.dev")),
    }
}

pub fn test_profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        username: id.to_string(),
        display_name: None,
        avatar_url: None,
        created_at: None,
    }
}

pub fn test_preference(user_id: &str) -> DrinkPreference {
    DrinkPreference {
        user_id: user_id.to_string(),
        favorite_drink: Some("flat white".to_string()),
        milk: Some("oat".to_string()),
        sweetness: None,
    }
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    builder.body(body).expect("request to build")
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request to be handled");
    let status = response.status();

    let bytes = hyper::body::to_bytes(response.into_body())
        .await
        .expect("body to be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body to be JSON")
    };

    (status, body)
}
