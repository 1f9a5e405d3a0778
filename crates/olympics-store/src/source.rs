//! [`DataSource`] implementations: a local JSON file or an HTTP endpoint.

use std::{path::PathBuf, time::Duration};

use olympics_core::{model::Snapshot, source::DataSource};
use reqwest::Client;

use crate::{Error, Result};

// ─── File ────────────────────────────────────────────────────────────────────

/// Reads the dataset from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
  path: PathBuf,
}

impl FileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl DataSource for FileSource {
  type Error = Error;

  fn describe(&self) -> String { self.path.display().to_string() }

  async fn fetch(&self) -> Result<Snapshot> {
    let bytes = tokio::fs::read(&self.path).await.map_err(|source| Error::Io {
      path: self.path.clone(),
      source,
    })?;
    Ok(Snapshot::from_json(&bytes)?)
  }
}

// ─── HTTP ────────────────────────────────────────────────────────────────────

/// Fetches the dataset with a single `GET`.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct HttpSource {
  client: Client,
  url:    String,
}

impl HttpSource {
  pub fn new(url: impl Into<String>) -> Result<Self> {
    let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    Ok(Self {
      client,
      url: url.into(),
    })
  }
}

impl DataSource for HttpSource {
  type Error = Error;

  fn describe(&self) -> String { self.url.clone() }

  async fn fetch(&self) -> Result<Snapshot> {
    let resp = self.client.get(&self.url).send().await?;

    if !resp.status().is_success() {
      return Err(Error::Status {
        url:    self.url.clone(),
        status: resp.status(),
      });
    }
    let bytes = resp.bytes().await?;
    Ok(Snapshot::from_json(&bytes)?)
  }
}

// ─── Either ──────────────────────────────────────────────────────────────────

/// A source picked from a configured location string: `http://` and
/// `https://` URLs are fetched over HTTP, anything else is read as a file
/// path.
#[derive(Debug, Clone)]
pub enum Source {
  File(FileSource),
  Http(HttpSource),
}

impl Source {
  pub fn from_location(location: &str) -> Result<Self> {
    if location.starts_with("http://") || location.starts_with("https://") {
      Ok(Self::Http(HttpSource::new(location)?))
    } else {
      Ok(Self::File(FileSource::new(location)))
    }
  }
}

impl DataSource for Source {
  type Error = Error;

  fn describe(&self) -> String {
    match self {
      Self::File(s) => s.describe(),
      Self::Http(s) => s.describe(),
    }
  }

  async fn fetch(&self) -> Result<Snapshot> {
    match self {
      Self::File(s) => s.fetch().await,
      Self::Http(s) => s.fetch().await,
    }
  }
}
