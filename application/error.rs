use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is not configured")]
    Configuration(&'static str),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("authentication required")]
    Unauthenticated,
    #[error("you can only act on your own account")]
    Forbidden,
    #[error("post is already liked")]
    AlreadyLiked,
    #[error("the places provider denied the request")]
    UpstreamDenied { details: String },
    #[error("the places provider returned status {0}")]
    Upstream(String),
    #[error("storage operation failed")]
    Storage(String),
    #[error("unexpected error")]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::AlreadyLiked => StatusCode::BAD_REQUEST,
            AppError::UpstreamDenied { .. } => StatusCode::FORBIDDEN,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Anyhow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal detail stays in the logs, never in the response body.
        match &self {
            AppError::Storage(detail) => {
                error!(detail, "storage operation failed");
            }
            AppError::Anyhow(err) => {
                let error_message = format!("{err:#}");
                error!(error_message, "unexpected error");
            }
            AppError::Configuration(name) => {
                error!(name, "required configuration is missing");
            }
            _ => {}
        }

        let mut payload = json!({ "error": self.to_string() });
        if let AppError::UpstreamDenied { details } = &self {
            payload["details"] = json!(details);
        }

        (status_code, Json(payload)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
