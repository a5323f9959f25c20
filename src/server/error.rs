use crate::error::DayScoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return, mapped onto HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Report(#[from] DayScoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Report(DayScoreError::Analysis(err)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Report(DayScoreError::PowerApi(err)) => {
                // The archive URL and transport detail stay in the logs.
                tracing::error!(error = ?err, "archive request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch data from the upstream climate archive".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
