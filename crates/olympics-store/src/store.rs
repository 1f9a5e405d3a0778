//! [`DatasetStore`] — holds the latest snapshot and pushes replacements to
//! subscribers.

use std::sync::Arc;

use olympics_core::{model::Snapshot, source::DataSource};
use serde::Serialize;
use tokio::sync::watch;

/// What a call to [`DatasetStore::load`] did to the stored snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
  /// The fetched dataset replaced the previous one.
  Loaded { countries: usize },
  /// The fetch failed; the store now holds an empty snapshot.
  Reset,
}

/// The single holder of the current dataset.
///
/// Readers get an `Arc` to an immutable [`Snapshot`]; a load swaps the whole
/// `Arc`, so nobody ever sees a half-built dataset. Subscribers are notified
/// of every replacement, and a subscriber that registers late starts from the
/// latest snapshot.
///
/// Cloning is cheap — all clones share one channel.
#[derive(Clone)]
pub struct DatasetStore {
  tx: Arc<watch::Sender<Arc<Snapshot>>>,
}

impl Default for DatasetStore {
  fn default() -> Self { Self::new() }
}

impl DatasetStore {
  /// A store holding the empty snapshot.
  pub fn new() -> Self {
    let (tx, _rx) = watch::channel(Arc::new(Snapshot::empty()));
    Self { tx: Arc::new(tx) }
  }

  /// The latest snapshot.
  pub fn current(&self) -> Arc<Snapshot> { self.tx.borrow().clone() }

  /// Register for snapshot replacements. The receiver's current value is
  /// already the latest snapshot.
  ///
  /// Notifications coalesce: a receiver that has not caught up when several
  /// loads complete is woken once and sees only the newest snapshot, never
  /// the ones in between. Each snapshot is a full replacement, so nothing is
  /// lost by skipping them.
  pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
    self.tx.subscribe()
  }

  /// Fetch from `source` and replace the stored snapshot.
  ///
  /// A failed fetch is logged and leaves the store holding an empty snapshot;
  /// the error itself never reaches the caller. Until the fetch completes,
  /// readers keep seeing the previous snapshot. Dropping the returned future
  /// before it completes leaves the store untouched.
  pub async fn load<S: DataSource>(&self, source: &S) -> LoadStatus {
    match source.fetch().await {
      Ok(snapshot) => {
        let countries = snapshot.len();
        tracing::info!(source = %source.describe(), countries, "dataset loaded");
        self.replace(snapshot);
        LoadStatus::Loaded { countries }
      }
      Err(e) => {
        tracing::error!(
          source = %source.describe(),
          error = %e,
          "failed to load dataset; resetting to empty"
        );
        self.replace(Snapshot::empty());
        LoadStatus::Reset
      }
    }
  }

  fn replace(&self, snapshot: Snapshot) {
    self.tx.send_replace(Arc::new(snapshot));
  }
}
