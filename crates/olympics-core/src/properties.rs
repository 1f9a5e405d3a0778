//! Properties that hold for every well-formed snapshot: unique country names,
//! unique years per country, arbitrary counts, any country order.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
  aggregate::{
    Metric, country_exists, distinct_country_count, distinct_edition_count,
    total_for, total_medals_by_country,
  },
  guard::{Navigation, check},
  model::{Country, Edition, OLYMPIC_YEARS, Snapshot, Year},
  view::{build_category_summary, build_country_time_series, build_overview},
};

/// Up to eight editions with distinct years, in shuffled (non-chronological)
/// order.
fn editions() -> impl Strategy<Value = Vec<Edition>> {
  (
    prop::sample::subsequence(OLYMPIC_YEARS.to_vec(), 0..=8).prop_shuffle(),
    prop::collection::vec((0u32..200, 0u32..1000), 8),
  )
    .prop_map(|(years, counts)| {
      years
        .into_iter()
        .zip(counts)
        .zip(1..)
        .map(|((year, (medals, athletes)), id)| Edition {
          id,
          year: Year::try_from(year).expect("year drawn from OLYMPIC_YEARS"),
          host_city: "Host".into(),
          medal_count: medals,
          athlete_count: athletes,
        })
        .collect()
    })
}

/// Capitalised names, optionally hyphenated, so every name also passes the
/// navigation guard.
fn snapshots() -> impl Strategy<Value = Snapshot> {
  prop::collection::btree_map(
    "[A-Z][a-z]{2,10}(-[A-Z][a-z]{2,8})?",
    editions(),
    0..12,
  )
  .prop_map(|countries| countries.into_iter().collect::<Vec<_>>())
  .prop_shuffle()
  .prop_map(|countries| {
    Snapshot::new(
      countries
        .into_iter()
        .zip(1..)
        .map(|((name, editions), id)| Country { id, name, editions })
        .collect(),
    )
  })
}

/// Lowercase-initial names can never collide with a generated country.
fn absent_name() -> impl Strategy<Value = String> { "[a-z][a-z-]{2,12}" }

proptest! {
  #[test]
  fn participations_equal_edition_count(s in snapshots()) {
    for c in &s.countries {
      prop_assert_eq!(
        total_for(&s, &c.name, Metric::Participations).value,
        c.editions.len() as u64
      );
    }
  }

  #[test]
  fn per_country_totals_sum_editions(s in snapshots()) {
    for c in &s.countries {
      let medals: u64 = c.editions.iter().map(|e| u64::from(e.medal_count)).sum();
      let athletes: u64 = c.editions.iter().map(|e| u64::from(e.athlete_count)).sum();
      prop_assert_eq!(total_for(&s, &c.name, Metric::Medals).value, medals);
      prop_assert_eq!(total_for(&s, &c.name, Metric::Athletes).value, athletes);
    }
  }

  #[test]
  fn medal_map_sums_every_edition(s in snapshots()) {
    let all: u64 = s
      .countries
      .iter()
      .flat_map(|c| &c.editions)
      .map(|e| u64::from(e.medal_count))
      .sum();
    prop_assert_eq!(total_medals_by_country(&s).values().sum::<u64>(), all);
  }

  #[test]
  fn distinct_counts_match_sets(s in snapshots()) {
    let names: HashSet<_> = s.countries.iter().map(|c| c.name.as_str()).collect();
    let years: HashSet<_> = s
      .countries
      .iter()
      .flat_map(|c| c.editions.iter().map(|e| e.year))
      .collect();
    prop_assert_eq!(distinct_country_count(&s), names.len());
    prop_assert_eq!(distinct_edition_count(&s), years.len());
  }

  #[test]
  fn every_present_name_exists(s in snapshots()) {
    for c in &s.countries {
      prop_assert!(country_exists(&s, &c.name));
      prop_assert!(!country_exists(&s, &c.name.to_lowercase()));
      prop_assert_eq!(check(&s, &c.name), Navigation::Valid);
    }
  }

  #[test]
  fn absent_names_miss_everywhere(s in snapshots(), name in absent_name()) {
    prop_assert!(!country_exists(&s, &name));
    prop_assert_eq!(check(&s, &name), Navigation::NotFound);
    for metric in [Metric::Athletes, Metric::Medals, Metric::Participations] {
      let lookup = total_for(&s, &name, metric);
      prop_assert_eq!(lookup.value, 0);
      prop_assert!(!lookup.found);
    }
    let series = build_country_time_series(&s, &name);
    prop_assert!(!series.found);
    prop_assert!(series.value.is_empty());
  }

  #[test]
  fn summary_follows_snapshot_order_and_totals(s in snapshots()) {
    let summary = build_category_summary(&s);
    prop_assert_eq!(summary.len(), distinct_country_count(&s));
    for (entry, country) in summary.iter().zip(&s.countries) {
      prop_assert_eq!(&entry.name, &country.name);
      prop_assert_eq!(entry.value, total_for(&s, &entry.name, Metric::Medals).value);
    }
  }

  #[test]
  fn time_series_keeps_stored_edition_order(s in snapshots()) {
    for c in &s.countries {
      let lookup = build_country_time_series(&s, &c.name);
      prop_assert!(lookup.found);
      let labels: Vec<String> =
        lookup.value[0].series.iter().map(|p| p.name.clone()).collect();
      let expected: Vec<String> =
        c.editions.iter().map(|e| e.year.to_string()).collect();
      prop_assert_eq!(labels, expected);
    }
  }

  #[test]
  fn aggregations_are_idempotent(s in snapshots(), name in absent_name()) {
    prop_assert_eq!(total_medals_by_country(&s), total_medals_by_country(&s));
    prop_assert_eq!(build_overview(&s), build_overview(&s));
    prop_assert_eq!(distinct_edition_count(&s), distinct_edition_count(&s));
    for c in &s.countries {
      prop_assert_eq!(
        total_for(&s, &c.name, Metric::Athletes),
        total_for(&s, &c.name, Metric::Athletes)
      );
    }
    prop_assert_eq!(
      total_for(&s, &name, Metric::Medals),
      total_for(&s, &name, Metric::Medals)
    );
  }
}
