//! Navigation guard for the detail view.
//!
//! A country identifier arrives as a raw query parameter. It is checked for
//! shape first and existence second; only a [`Navigation::Valid`] identifier
//! ever reaches the aggregation functions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
  aggregate::country_exists,
  model::Snapshot,
  view::{CountryDetail, build_country_detail},
};

/// Message shown to the user for any identifier that does not resolve.
pub const NOT_FOUND_MESSAGE: &str = "country not found";

static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z-]+$").expect("Invalid country identifier regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
  Valid,
  NotFound,
}

impl Navigation {
  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound) }
}

/// Whether `raw` has the shape of a country identifier. Says nothing about
/// whether that country is loaded.
pub fn is_well_formed(raw: &str) -> bool { IDENTIFIER_REGEX.is_match(raw) }

pub fn check(snapshot: &Snapshot, raw: &str) -> Navigation {
  if !is_well_formed(raw) {
    tracing::debug!(identifier = raw, "malformed country identifier");
    return Navigation::NotFound;
  }
  if !country_exists(snapshot, raw) {
    tracing::debug!(identifier = raw, "unknown country identifier");
    return Navigation::NotFound;
  }
  Navigation::Valid
}

/// The outcome of navigating to a country's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
  Ready(CountryDetail),
  NotFound,
}

impl DetailView {
  pub fn message(&self) -> Option<&'static str> {
    match self {
      Self::Ready(_) => None,
      Self::NotFound => Some(NOT_FOUND_MESSAGE),
    }
  }
}

/// Run the guard and build the detail view-model only when it passes.
pub fn resolve_detail(snapshot: &Snapshot, raw: &str) -> DetailView {
  match check(snapshot, raw) {
    Navigation::NotFound => DetailView::NotFound,
    Navigation::Valid => build_country_detail(snapshot, raw)
      .map_or(DetailView::NotFound, DetailView::Ready),
  }
}
