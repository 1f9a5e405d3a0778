//! Chart-ready view-models.
//!
//! The shapes match what the chart front-end binds to: `{name, value}` slices
//! for the overview pie chart and `{name, series}` lines for the detail chart.

use serde::{Deserialize, Serialize};

use crate::{
  aggregate::{
    Lookup, Metric, distinct_country_count, distinct_edition_count,
    total_for, total_medals_by_country,
  },
  model::Snapshot,
};

// ─── Overview ────────────────────────────────────────────────────────────────

/// One slice of the overview chart: a country and its medal total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
  pub name:  String,
  pub value: u64,
}

/// One slice per distinct country, in first-seen order.
pub fn build_category_summary(snapshot: &Snapshot) -> Vec<CategoryEntry> {
  total_medals_by_country(snapshot)
    .into_iter()
    .map(|(name, value)| CategoryEntry { name, value })
    .collect()
}

/// Everything the overview page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
  pub country_count: usize,
  pub edition_count: usize,
  pub summary:       Vec<CategoryEntry>,
}

pub fn build_overview(snapshot: &Snapshot) -> Overview {
  Overview {
    country_count: distinct_country_count(snapshot),
    edition_count: distinct_edition_count(snapshot),
    summary:       build_category_summary(snapshot),
  }
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// A single point on a line: the edition year as a label and the medal count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
  pub name:  String,
  pub value: u64,
}

/// A named line on the detail chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
  pub name:   String,
  pub series: Vec<SeriesPoint>,
}

/// Medals per edition for `name`, keeping the stored edition order.
///
/// Yields a single series when the country exists, an empty list otherwise.
pub fn build_country_time_series(
  snapshot: &Snapshot,
  name: &str,
) -> Lookup<Vec<Series>> {
  let Some(country) = snapshot.find(name) else {
    tracing::warn!(country = name, "no data for country");
    return Lookup::not_found();
  };

  let points = country
    .editions
    .iter()
    .map(|e| SeriesPoint {
      name:  e.year.to_string(),
      value: u64::from(e.medal_count),
    })
    .collect();

  Lookup::found(vec![Series {
    name:   country.name.clone(),
    series: points,
  }])
}

/// Everything the detail page shows for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetail {
  pub name:           String,
  pub participations: u64,
  pub medals:         u64,
  pub athletes:       u64,
  pub series:         Vec<Series>,
}

/// Returns `None` when no country is named exactly `name`.
pub fn build_country_detail(
  snapshot: &Snapshot,
  name: &str,
) -> Option<CountryDetail> {
  let series = build_country_time_series(snapshot, name).into_option()?;

  let total = |metric: Metric| total_for(snapshot, name, metric).value;
  Some(CountryDetail {
    name: name.to_owned(),
    participations: total(Metric::Participations),
    medals: total(Metric::Medals),
    athletes: total(Metric::Athletes),
    series,
  })
}
