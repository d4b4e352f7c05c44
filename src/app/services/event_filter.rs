//! Event filtering for the dashboard view
//!
//! Filtering is a pure, stable selection: the result is always a subsequence
//! of the input in the same relative order. Events without a date are never
//! excluded by date criteria.

use crate::app::models::{Event, FilterCriteria};
use tracing::debug;

/// Apply filter criteria to events
///
/// # Arguments
///
/// * `events` - Full event sequence
/// * `criteria` - Criteria; unset fields do not constrain
///
/// # Returns
///
/// References to the events that satisfy every supplied criterion
pub fn filter_events<'a>(events: &'a [Event], criteria: &FilterCriteria) -> Vec<&'a Event> {
    let filtered: Vec<&Event> = events
        .iter()
        .filter(|event| passes_filters(event, criteria))
        .collect();

    debug!(
        "Filtering complete: {} -> {} events ({} filtered out)",
        events.len(),
        filtered.len(),
        events.len() - filtered.len()
    );

    filtered
}

/// Check if an event passes every supplied criterion
pub fn passes_filters(event: &Event, criteria: &FilterCriteria) -> bool {
    if let Some(date) = event.date {
        if criteria.start_date.is_some_and(|start| date < start) {
            return false;
        }
        if criteria.end_date.is_some_and(|end| date > end) {
            return false;
        }
    }

    if criteria
        .main_type
        .is_some_and(|main_type| event.main_type != main_type)
    {
        return false;
    }

    if let Some(region) = &criteria.region {
        if event.region != *region {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::MainType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(day: Option<NaiveDate>, main_type: MainType, region: &str) -> Event {
        Event {
            date: day,
            main_type,
            region: region.to_string(),
            ..Event::default()
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            event(Some(date(2024, 1, 10)), MainType::Hail, "Canelones"),
            event(Some(date(2024, 2, 1)), MainType::Gust, "Salto"),
            event(None, MainType::Hail, "Salto"),
            event(Some(date(2024, 3, 31)), MainType::Tornado, "Canelones"),
            event(Some(date(2023, 12, 31)), MainType::Hail, "Rocha"),
        ]
    }

    fn is_subsequence(filtered: &[&Event], full: &[Event]) -> bool {
        let mut remaining = full.iter();
        filtered
            .iter()
            .all(|wanted| remaining.any(|candidate| std::ptr::eq(candidate, *wanted)))
    }

    #[test]
    fn test_no_criteria_returns_everything() {
        let events = sample_events();
        let filtered = filter_events(&events, &FilterCriteria::new());

        assert_eq!(filtered.len(), events.len());
        for (kept, original) in filtered.iter().zip(events.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let events = sample_events();
        let criteria = FilterCriteria::new()
            .with_start_date(date(2024, 1, 10))
            .with_end_date(date(2024, 3, 31));

        let filtered = filter_events(&events, &criteria);
        let regions: Vec<&str> = filtered.iter().map(|e| e.region.as_str()).collect();

        assert_eq!(regions, vec!["Canelones", "Salto", "Salto", "Canelones"]);
    }

    #[test]
    fn test_undated_events_pass_date_criteria() {
        let events = sample_events();
        let criteria = FilterCriteria::new()
            .with_start_date(date(2030, 1, 1))
            .with_end_date(date(2030, 12, 31));

        let filtered = filter_events(&events, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, None);
    }

    #[test]
    fn test_type_and_region_are_exact_matches() {
        let events = sample_events();

        let hail = filter_events(&events, &FilterCriteria::new().with_main_type(MainType::Hail));
        assert_eq!(hail.len(), 3);

        let salto_hail = filter_events(
            &events,
            &FilterCriteria::new()
                .with_main_type(MainType::Hail)
                .with_region("Salto"),
        );
        assert_eq!(salto_hail.len(), 1);
        assert_eq!(salto_hail[0].date, None);

        let lowercase = filter_events(&events, &FilterCriteria::new().with_region("salto"));
        assert!(lowercase.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let events = sample_events();
        let criteria_set = [
            FilterCriteria::new().with_region("Canelones"),
            FilterCriteria::new().with_start_date(date(2024, 2, 1)),
            FilterCriteria::new().with_end_date(date(2024, 1, 31)),
            FilterCriteria::new().with_main_type(MainType::Funnel),
        ];

        for criteria in &criteria_set {
            let filtered = filter_events(&events, criteria);
            assert!(filtered.len() <= events.len());
            assert!(is_subsequence(&filtered, &events), "{:?}", criteria);
        }
    }
}
