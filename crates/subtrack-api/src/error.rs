//! API error type shared by the subscription handlers.
//!
//! Every error renders as a `{"error": msg}` JSON body with the matching
//! status code: missing row → 404, boundary validation → 400, store
//! failure → 500 (surfaced unchanged, nothing to recover from locally).

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
  /// No subscription row with this id.
  #[error("subscription {0} not found")]
  NotFound(i64),

  /// The request parsed but carries an invalid value (bad month, bad
  /// UUID, reversed interval, non-positive id).
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The subscription store failed.
  #[error("subscription store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
