//! Handlers for the overview page.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/overview` | Country and edition counts plus the medal summary |
//! | `GET`  | `/summary` | Medal summary only, one `{name, value}` per country |

use axum::{Json, extract::State};
use olympics_core::{
  source::DataSource,
  view::{CategoryEntry, Overview, build_category_summary, build_overview},
};

use crate::AppState;

/// `GET /overview`
pub async fn overview<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Json<Overview> {
  Json(build_overview(&state.store.current()))
}

/// `GET /summary`
pub async fn summary<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Json<Vec<CategoryEntry>> {
  Json(build_category_summary(&state.store.current()))
}
