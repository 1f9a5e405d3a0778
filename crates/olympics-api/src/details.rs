//! Handlers for a single country.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/details` | `?name` required; 404 if the guard rejects it |
//! | `GET`  | `/totals` | `?name` and `?metric` required; always 200 |

use axum::{
  Json,
  extract::{Query, State},
};
use olympics_core::{
  aggregate::{Lookup, Metric, total_for},
  guard::{DetailView, resolve_detail},
  source::DataSource,
  view::CountryDetail,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

// ─── Detail ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DetailParams {
  /// Country identifier as carried by the overview link. A missing parameter
  /// is treated like an empty one.
  #[serde(default)]
  pub name: String,
}

/// `GET /details?name=<country>`
pub async fn detail<S: DataSource>(
  State(state): State<AppState<S>>,
  Query(params): Query<DetailParams>,
) -> Result<Json<CountryDetail>, ApiError> {
  match resolve_detail(&state.store.current(), &params.name) {
    DetailView::Ready(detail) => Ok(Json(detail)),
    DetailView::NotFound => {
      tracing::warn!(country = %params.name, "detail requested for unknown country");
      Err(ApiError::CountryNotFound)
    }
  }
}

// ─── Totals ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TotalParams {
  #[serde(default)]
  pub name:   String,
  pub metric: Metric,
}

/// `GET /totals?name=<country>&metric=athletes|medals|participations`
///
/// An unknown country is not an error here: the body is `{"value": 0,
/// "found": false}`.
pub async fn total<S: DataSource>(
  State(state): State<AppState<S>>,
  Query(params): Query<TotalParams>,
) -> Json<Lookup<u64>> {
  Json(total_for(&state.store.current(), &params.name, params.metric))
}
