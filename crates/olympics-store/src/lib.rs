//! Snapshot holder and data sources for the Olympics dashboard.
//!
//! [`DatasetStore`] owns the current dataset; [`source`] provides the file and
//! HTTP fetchers it loads from.

mod store;

pub mod error;
pub mod source;

pub use error::{Error, Result};
pub use source::{FileSource, HttpSource, Source};
pub use store::{DatasetStore, LoadStatus};
