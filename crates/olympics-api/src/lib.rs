//! JSON API for the Olympics dashboard.
//!
//! Exposes an axum [`Router`] serving the chart view-models built from a
//! [`DatasetStore`]. Transport concerns (binding, tracing, TLS) are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", olympics_api::api_router(state))
//! ```

pub mod details;
pub mod error;
pub mod overview;
pub mod reload;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use olympics_core::source::DataSource;
use olympics_store::DatasetStore;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers: the dataset and the source
/// `POST /reload` fetches from.
pub struct AppState<S> {
  pub store:  DatasetStore,
  pub source: Arc<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  self.store.clone(),
      source: self.source.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: DataSource + 'static,
{
  Router::new()
    // Overview
    .route("/overview", get(overview::overview::<S>))
    .route("/summary", get(overview::summary::<S>))
    // Country
    .route("/details", get(details::detail::<S>))
    .route("/totals", get(details::total::<S>))
    // Dataset
    .route("/reload", post(reload::reload::<S>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
