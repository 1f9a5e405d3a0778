//! Errors a dashboard handler can answer with.
//!
//! Lookups that miss are not errors at the aggregation layer; only the detail
//! page turns a rejected identifier into a 404, so the user sees the same
//! message whichever check failed.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use olympics_core::guard::NOT_FOUND_MESSAGE;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  /// The navigation guard rejected the identifier: malformed, or no such
  /// country in the current snapshot.
  #[error("country not found")]
  CountryNotFound,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::CountryNotFound => StatusCode::NOT_FOUND,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let message = match self {
      Self::CountryNotFound => NOT_FOUND_MESSAGE,
    };
    (self.status(), Json(json!({ "error": message }))).into_response()
  }
}
