//! Dashboard summary cards and chart series
//!
//! Each function derives one of the dashboard panels from the filtered
//! events. Date-bucketed series only count dated events.

use super::{Average, average_intensity, count_distinct_regions, count_verified, group_count};
use crate::app::models::{Event, MainType};
use crate::constants::UNKNOWN_REGION_LABEL;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Headline numbers shown above the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCards {
    pub total_events: usize,
    pub verified_events: usize,
    pub regions_affected: usize,
    pub average_intensity: Average,
}

/// One bucket of a counted series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry<K> {
    pub key: K,
    pub count: usize,
}

/// Share of one phenomenon type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub main_type: MainType,
    pub label: &'static str,
    pub count: usize,
    /// Percentage of all events in the view
    pub percentage: f64,
}

/// Summary cards for the view
pub fn summary_cards<E: Borrow<Event>>(events: &[E]) -> SummaryCards {
    SummaryCards {
        total_events: events.len(),
        verified_events: count_verified(events),
        regions_affected: count_distinct_regions(events),
        average_intensity: average_intensity(events),
    }
}

/// Events per phenomenon type, in classification order, present types only
pub fn type_distribution<E: Borrow<Event>>(events: &[E]) -> Vec<TypeShare> {
    let counts = group_count(events, |e| Some(e.main_type));
    let total = events.len();

    MainType::ALL
        .into_iter()
        .filter_map(|main_type| {
            counts.get(&main_type).map(|&count| TypeShare {
                main_type,
                label: main_type.label(),
                count,
                percentage: count as f64 * 100.0 / total as f64,
            })
        })
        .collect()
}

/// Events per `YYYY-MM`, ascending
pub fn events_per_month<E: Borrow<Event>>(events: &[E]) -> Vec<CountEntry<String>> {
    group_count(events, Event::month_key)
        .into_iter()
        .map(|(key, count)| CountEntry { key, count })
        .collect()
}

/// Events per calendar year, ascending
pub fn events_per_year<E: Borrow<Event>>(events: &[E]) -> Vec<CountEntry<i32>> {
    group_count(events, Event::year)
        .into_iter()
        .map(|(key, count)| CountEntry { key, count })
        .collect()
}

/// Regions with the most events, busiest first
///
/// Events without a region are counted under a placeholder label. Ties are
/// broken alphabetically.
pub fn top_regions<E: Borrow<Event>>(events: &[E], limit: usize) -> Vec<CountEntry<String>> {
    let counts = group_count(events, |e| {
        Some(if e.region.is_empty() {
            UNKNOWN_REGION_LABEL
        } else {
            e.region.as_str()
        })
    });

    let mut entries: Vec<CountEntry<String>> = counts
        .into_iter()
        .map(|(key, count)| CountEntry {
            key: key.to_string(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries.truncate(limit);
    entries
}

/// Sorted distinct non-empty regions (the region filter options)
pub fn distinct_regions<E: Borrow<Event>>(events: &[E]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.borrow().region.as_str())
        .filter(|r| !r.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(date: Option<(i32, u32, u32)>, main_type: MainType, region: &str) -> Event {
        Event {
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            main_type,
            region: region.to_string(),
            ..Event::default()
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            event(Some((2023, 11, 5)), MainType::Hail, "Canelones"),
            event(Some((2024, 1, 10)), MainType::Hail, "Salto"),
            event(Some((2024, 1, 22)), MainType::Gust, "Canelones"),
            event(None, MainType::Tornado, ""),
            event(Some((2024, 3, 2)), MainType::Hail, "Rocha"),
        ]
    }

    #[test]
    fn test_type_distribution_percentages() {
        let shares = type_distribution(&sample_events());

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].main_type, MainType::Hail);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].label, "Granizo");
        assert!((shares[0].percentage - 60.0).abs() < 1e-9);
        assert_eq!(shares[2].main_type, MainType::Tornado);

        let total: usize = shares.iter().map(|s| s.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_type_distribution_empty() {
        let empty: Vec<Event> = Vec::new();
        assert!(type_distribution(&empty).is_empty());
    }

    #[test]
    fn test_monthly_and_yearly_series_skip_undated() {
        let events = sample_events();

        let months = events_per_month(&events);
        let keys: Vec<&str> = months.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["2023-11", "2024-01", "2024-03"]);
        assert_eq!(months[1].count, 2);

        let years = events_per_year(&events);
        assert_eq!(
            years,
            vec![
                CountEntry { key: 2023, count: 1 },
                CountEntry { key: 2024, count: 3 },
            ]
        );
    }

    #[test]
    fn test_top_regions_orders_by_count_then_name() {
        let top = top_regions(&sample_events(), 10);
        let keys: Vec<&str> = top.iter().map(|t| t.key.as_str()).collect();

        assert_eq!(keys, vec!["Canelones", "Desconocido", "Rocha", "Salto"]);
        assert_eq!(top[0].count, 2);

        assert_eq!(top_regions(&sample_events(), 1).len(), 1);
    }

    #[test]
    fn test_distinct_regions_sorted_without_blanks() {
        assert_eq!(
            distinct_regions(&sample_events()),
            vec!["Canelones", "Rocha", "Salto"]
        );
    }

    #[test]
    fn test_summary_cards() {
        let mut events = sample_events();
        events[0].verified = "SI".to_string();
        events[1].intensity_value = Some(3.0);

        let cards = summary_cards(&events);
        assert_eq!(cards.total_events, 5);
        assert_eq!(cards.verified_events, 1);
        assert_eq!(cards.regions_affected, 3);
        assert_eq!(cards.average_intensity, Average::Value(3.0));

        let empty: Vec<Event> = Vec::new();
        assert_eq!(summary_cards(&empty).average_intensity, Average::NoData);
    }
}
