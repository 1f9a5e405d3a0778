//! Handler for `POST /reload`.

use axum::{Json, extract::State};
use olympics_core::source::DataSource;
use olympics_store::LoadStatus;

use crate::AppState;

/// `POST /reload` — fetch the dataset again and replace the snapshot.
///
/// Always 200: a failed fetch leaves an empty dataset and answers
/// `{"status":"reset"}`.
pub async fn reload<S: DataSource>(
  State(state): State<AppState<S>>,
) -> Json<LoadStatus> {
  Json(state.store.load(state.source.as_ref()).await)
}
