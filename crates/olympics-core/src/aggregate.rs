//! Totals and counts computed over a [`Snapshot`].
//!
//! Every function here is pure: the same snapshot always yields the same
//! result. A country that is not in the snapshot is an expected condition
//! (a mistyped query parameter, a stale link), so lookups report it through
//! [`Lookup`] instead of an error.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{Country, Snapshot};

// ─── Metric ──────────────────────────────────────────────────────────────────

/// Which per-country total to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
  Athletes,
  Medals,
  Participations,
}

impl Metric {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Athletes => "athletes",
      Self::Medals => "medals",
      Self::Participations => "participations",
    }
  }

  /// This metric's contribution from a single country.
  fn total(&self, country: &Country) -> u64 {
    match self {
      Self::Athletes => country
        .editions
        .iter()
        .map(|e| u64::from(e.athlete_count))
        .sum(),
      Self::Medals => medal_total(country),
      Self::Participations => country.editions.len() as u64,
    }
  }
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// The result of a by-name lookup. When the country is missing, `value` holds
/// the type's empty value (`0`, an empty list) and `found` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup<T> {
  pub value: T,
  pub found: bool,
}

impl<T> Lookup<T> {
  pub fn found(value: T) -> Self { Self { value, found: true } }

  pub fn into_option(self) -> Option<T> { self.found.then_some(self.value) }
}

impl<T: Default> Lookup<T> {
  pub fn not_found() -> Self {
    Self {
      value: T::default(),
      found: false,
    }
  }
}

// ─── Per-country totals ──────────────────────────────────────────────────────

fn medal_total(country: &Country) -> u64 {
  country.editions.iter().map(|e| u64::from(e.medal_count)).sum()
}

/// Total `metric` for the country named exactly `name`.
pub fn total_for(snapshot: &Snapshot, name: &str, metric: Metric) -> Lookup<u64> {
  match snapshot.find(name) {
    Some(country) => {
      let total = metric.total(country);
      tracing::debug!(country = name, metric = metric.as_str(), total, "computed total");
      Lookup::found(total)
    }
    None => {
      tracing::debug!(country = name, metric = metric.as_str(), "country not found");
      Lookup::not_found()
    }
  }
}

/// Medal totals keyed by country name, in the order countries first appear in
/// the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedalTotals {
  entries: Vec<(String, u64)>,
}

impl MedalTotals {
  pub fn get(&self, name: &str) -> Option<u64> {
    self
      .entries
      .iter()
      .find(|(n, _)| n == name)
      .map(|(_, total)| *total)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
    self.entries.iter().map(|(n, total)| (n.as_str(), *total))
  }

  pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
    self.entries.iter().map(|(_, total)| *total)
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl IntoIterator for MedalTotals {
  type Item = (String, u64);
  type IntoIter = std::vec::IntoIter<(String, u64)>;

  fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

/// Sum of `medal_count` for every country in the snapshot. Countries without
/// any edition are included with a total of zero.
pub fn total_medals_by_country(snapshot: &Snapshot) -> MedalTotals {
  let mut index: HashMap<&str, usize> = HashMap::new();
  let mut entries: Vec<(String, u64)> = Vec::new();

  for country in &snapshot.countries {
    let medals = medal_total(country);
    match index.get(country.name.as_str()).copied() {
      Some(i) => entries[i].1 += medals,
      None => {
        index.insert(&country.name, entries.len());
        entries.push((country.name.clone(), medals));
      }
    }
  }

  MedalTotals { entries }
}

// ─── Counts ──────────────────────────────────────────────────────────────────

pub fn distinct_country_count(snapshot: &Snapshot) -> usize {
  snapshot
    .countries
    .iter()
    .map(|c| c.name.as_str())
    .collect::<HashSet<_>>()
    .len()
}

/// Number of distinct Games editions; an edition is counted once however
/// many countries took part in it.
pub fn distinct_edition_count(snapshot: &Snapshot) -> usize {
  snapshot
    .countries
    .iter()
    .flat_map(|c| c.editions.iter().map(|e| e.year))
    .collect::<HashSet<_>>()
    .len()
}

/// Exact, case-sensitive existence check.
pub fn country_exists(snapshot: &Snapshot, name: &str) -> bool {
  snapshot.find(name).is_some()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn metric_parses_lowercase_names() {
    let m: Metric = serde_json::from_str("\"participations\"").unwrap();
    assert_eq!(m, Metric::Participations);
    assert!(serde_json::from_str::<Metric>("\"Medals\"").is_err());
  }

  #[test]
  fn lookup_into_option() {
    assert_eq!(Lookup::found(3u64).into_option(), Some(3));
    assert_eq!(Lookup::<u64>::not_found().into_option(), None);
  }
}
