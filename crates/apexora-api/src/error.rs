//! API error type and [`axum::response::IntoResponse`] implementation.

use apexora_core::ValidationError;
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request body failed the shared validation schema. Always a 400
  /// carrying the first offending field and its message.
  #[error("validation failed: {0}")]
  Validation(#[from] ValidationError),

  /// The storage backend failed. Always a 500 with a generic message; the
  /// detail goes to the log, never to the client.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(e) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": e.message, "field": e.field })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "message": "Internal server error" })),
        )
          .into_response()
      }
    }
  }
}
