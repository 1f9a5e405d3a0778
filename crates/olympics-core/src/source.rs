//! The `DataSource` trait.
//!
//! Implemented by fetch backends (e.g. the file and HTTP sources in
//! `olympics-store`). The dataset store depends on this abstraction, not on
//! any concrete transport.

use std::future::Future;

use crate::model::Snapshot;

/// Something that can produce a full dataset snapshot on request.
///
/// A fetch either yields a complete snapshot or fails; there is no partial
/// result. The returned future is `Send` so the store can be driven from a
/// multi-threaded runtime (e.g. behind `axum` handlers).
pub trait DataSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Human-readable location of the data, used in log output.
  fn describe(&self) -> String;

  /// Fetch and parse the whole dataset.
  fn fetch(&self) -> impl Future<Output = Result<Snapshot, Self::Error>> + Send + '_;
}
