//! Aggregation over filtered event sequences
//!
//! Independent pure reductions: counts, predicate counts, grouped counts and
//! means. Every function accepts either owned events or references
//! (`&[Event]` or `&[&Event]`).
//!
//! - [`series`] - The dashboard's summary cards and chart series built on
//!   these reductions

pub mod series;

pub use series::{
    CountEntry, SummaryCards, TypeShare, distinct_regions, events_per_month, events_per_year,
    summary_cards, top_regions, type_distribution,
};

use crate::app::models::Event;
use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Arithmetic mean that may have no data behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Value(f64),
    NoData,
}

impl Average {
    /// The mean, if any value contributed
    pub fn value(&self) -> Option<f64> {
        match self {
            Average::Value(v) => Some(*v),
            Average::NoData => None,
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Value(v) => write!(f, "{:.1}", v),
            Average::NoData => f.write_str(crate::constants::EMPTY_CELL),
        }
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Number of events
pub fn count_total<E: Borrow<Event>>(events: &[E]) -> usize {
    events.len()
}

/// Number of events satisfying a predicate
pub fn count_matching<E, P>(events: &[E], predicate: P) -> usize
where
    E: Borrow<Event>,
    P: Fn(&Event) -> bool,
{
    events.iter().filter(|e| predicate((*e).borrow())).count()
}

/// Number of verified events
pub fn count_verified<E: Borrow<Event>>(events: &[E]) -> usize {
    count_matching(events, Event::is_verified)
}

/// Number of distinct non-empty regions
pub fn count_distinct_regions<E: Borrow<Event>>(events: &[E]) -> usize {
    group_count(events, |e| Some(e.region.as_str()).filter(|r| !r.is_empty())).len()
}

/// Count events per derived key; events whose key is `None` are skipped
pub fn group_count<'a, E, K, F>(events: &'a [E], key_fn: F) -> BTreeMap<K, usize>
where
    E: Borrow<Event>,
    K: Ord,
    F: Fn(&'a Event) -> Option<K>,
{
    let mut counts = BTreeMap::new();
    for event in events {
        if let Some(key) = key_fn(event.borrow()) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Mean of the values present; absent values count neither way
pub fn mean_of<E, F>(events: &[E], value_fn: F) -> Average
where
    E: Borrow<Event>,
    F: Fn(&Event) -> Option<f64>,
{
    let (sum, count) = events
        .iter()
        .filter_map(|e| value_fn(e.borrow()))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        Average::NoData
    } else {
        Average::Value(sum / count as f64)
    }
}

/// Mean intensity value
pub fn average_intensity<E: Borrow<Event>>(events: &[E]) -> Average {
    mean_of(events, |e| e.intensity_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::MainType;

    fn event(region: &str, verified: &str, intensity: Option<f64>) -> Event {
        Event {
            region: region.to_string(),
            verified: verified.to_string(),
            intensity_value: intensity,
            ..Event::default()
        }
    }

    #[test]
    fn test_counts() {
        let events = vec![
            event("Salto", "SI", Some(2.0)),
            event("Salto", "NO", None),
            event("", "SI", Some(4.0)),
            event("Rocha", "", None),
        ];

        assert_eq!(count_total(&events), 4);
        assert_eq!(count_verified(&events), 2);
        assert_eq!(count_distinct_regions(&events), 2);
        assert_eq!(count_matching(&events, |e| e.intensity_value.is_some()), 2);
    }

    #[test]
    fn test_reductions_accept_references() {
        let events = vec![event("Salto", "SI", Some(3.0)), event("Rocha", "NO", None)];
        let refs: Vec<&Event> = events.iter().collect();

        assert_eq!(count_total(&refs), 2);
        assert_eq!(count_verified(&refs), 1);
        assert_eq!(average_intensity(&refs), Average::Value(3.0));
    }

    #[test]
    fn test_group_count_skips_none_keys() {
        let mut events = vec![
            event("Salto", "SI", None),
            event("Salto", "NO", None),
            event("Rocha", "NO", None),
        ];
        events[2].main_type = MainType::Tornado;

        let by_type = group_count(&events, |e| Some(e.main_type));
        assert_eq!(by_type.get(&MainType::Other), Some(&2));
        assert_eq!(by_type.get(&MainType::Tornado), Some(&1));

        let by_year = group_count(&events, Event::year);
        assert!(by_year.is_empty());
    }

    #[test]
    fn test_mean_excludes_absent_values() {
        let events = vec![
            event("Salto", "SI", Some(2.0)),
            event("Salto", "SI", None),
            event("Salto", "SI", Some(5.0)),
        ];

        assert_eq!(average_intensity(&events), Average::Value(3.5));
        assert_eq!(average_intensity(&events).to_string(), "3.5");
    }

    #[test]
    fn test_mean_without_values_is_no_data() {
        let none_present = vec![event("Salto", "SI", None)];
        let empty: Vec<Event> = Vec::new();

        assert_eq!(average_intensity(&none_present), Average::NoData);
        assert_eq!(average_intensity(&empty), Average::NoData);
        assert_eq!(Average::NoData.to_string(), "N/A");
        assert_eq!(Average::NoData.value(), None);
    }

    #[test]
    fn test_average_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&Average::Value(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Average::NoData).unwrap(), "null");
    }
}
