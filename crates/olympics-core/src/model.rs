//! Dataset types — countries, their participations, and the snapshot that
//! holds them.
//!
//! Field names follow the JSON served by the data source (`country`,
//! `participations`, `city`, `medalsCount`, ...), so a fetched body
//! deserialises straight into a [`Snapshot`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Year ────────────────────────────────────────────────────────────────────

/// Every year in which Summer Games were held. 1916, 1940 and 1944 were
/// cancelled.
pub const OLYMPIC_YEARS: [u16; 30] = [
  1896, 1900, 1904, 1908, 1912, 1920, 1924, 1928, 1932, 1936, 1948, 1952,
  1956, 1960, 1964, 1968, 1972, 1976, 1980, 1984, 1988, 1992, 1996, 2000,
  2004, 2008, 2012, 2016, 2020, 2024,
];

/// A Games edition year, restricted to [`OLYMPIC_YEARS`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
  pub fn get(self) -> u16 { self.0 }
}

impl TryFrom<u16> for Year {
  type Error = Error;

  fn try_from(value: u16) -> Result<Self> {
    if OLYMPIC_YEARS.contains(&value) {
      Ok(Self(value))
    } else {
      Err(Error::InvalidYear(value))
    }
  }
}

impl From<Year> for u16 {
  fn from(year: Year) -> Self { year.0 }
}

impl fmt::Display for Year {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// One country's participation in one edition of the Games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
  pub id:            u32,
  pub year:          Year,
  #[serde(rename = "city")]
  pub host_city:     String,
  #[serde(rename = "medalsCount")]
  pub medal_count:   u32,
  #[serde(rename = "athleteCount")]
  pub athlete_count: u32,
}

/// A country and every edition it took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub id:       u32,
  #[serde(rename = "country")]
  pub name:     String,
  /// Stored in source order, which is not necessarily chronological.
  #[serde(rename = "participations", default)]
  pub editions: Vec<Edition>,
}

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// The whole dataset as loaded at one point in time. Never mutated; a reload
/// builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
  pub countries: Vec<Country>,
}

impl Snapshot {
  pub fn new(countries: Vec<Country>) -> Self { Self { countries } }

  /// The empty dataset every reader sees before the first load and after a
  /// failed one.
  pub fn empty() -> Self { Self::default() }

  /// Parse the JSON array served by a data source.
  pub fn from_json(bytes: &[u8]) -> Result<Self> {
    Ok(serde_json::from_slice(bytes)?)
  }

  /// First country whose name matches `name` exactly.
  pub fn find(&self, name: &str) -> Option<&Country> {
    self.countries.iter().find(|c| c.name == name)
  }

  pub fn is_empty(&self) -> bool { self.countries.is_empty() }

  pub fn len(&self) -> usize { self.countries.len() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn year_rejects_cancelled_games() {
    assert!(Year::try_from(2012).is_ok());
    assert!(matches!(Year::try_from(1916), Err(Error::InvalidYear(1916))));
    assert!(matches!(Year::try_from(2013), Err(Error::InvalidYear(2013))));
  }

  #[test]
  fn parses_source_field_names() {
    let json = br#"[{
      "id": 1,
      "country": "Italy",
      "participations": [
        {"id": 1, "year": 2012, "city": "Londres", "medalsCount": 28, "athleteCount": 372}
      ]
    }]"#;
    let snapshot = Snapshot::from_json(json).unwrap();
    assert_eq!(snapshot.len(), 1);
    let italy = snapshot.find("Italy").unwrap();
    assert_eq!(italy.editions[0].year.get(), 2012);
    assert_eq!(italy.editions[0].host_city, "Londres");
    assert_eq!(italy.editions[0].medal_count, 28);
    assert_eq!(italy.editions[0].athlete_count, 372);
  }

  #[test]
  fn out_of_set_year_fails_the_whole_parse() {
    let json = br#"[{"id": 1, "country": "Italy", "participations": [
      {"id": 1, "year": 1940, "city": "Tokyo", "medalsCount": 0, "athleteCount": 0}
    ]}]"#;
    assert!(Snapshot::from_json(json).is_err());
  }

  #[test]
  fn missing_participations_is_an_empty_list() {
    let snapshot =
      Snapshot::from_json(br#"[{"id": 7, "country": "Chad"}]"#).unwrap();
    assert!(snapshot.find("Chad").unwrap().editions.is_empty());
  }
}
