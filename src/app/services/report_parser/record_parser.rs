//! Individual record parsing for report lines
//!
//! This module converts the cleaned values of one data line into an
//! [`Event`], applying per-column coercion and the two derived fields.

use tracing::debug;

use super::classification::classify_phenomenon;
use super::column_mapping::{ColumnMapping, ReportColumn};
use super::field_parsers::{
    extract_intensity, normalize_verification, parse_coordinate, parse_quality_level,
    parse_report_date,
};
use super::stats::ParseStats;
use crate::app::models::Event;
use crate::constants::NOT_SAMPLED_MARKER;

/// Build an event from the cleaned values of one line
///
/// Missing trailing values read as empty strings and surplus values are
/// ignored.
pub fn parse_event_record(
    values: &[String],
    mapping: &ColumnMapping,
    line_number: usize,
    stats: &mut ParseStats,
) -> Event {
    let mut event = Event::default();

    if values.len() < mapping.width() {
        stats.short_rows += 1;
    } else if values.len() > mapping.width() {
        stats.long_rows += 1;
    }

    for (index, header) in mapping.headers.iter().enumerate() {
        let value = values.get(index).map(String::as_str).unwrap_or("");

        let Some(role) = mapping.roles[index] else {
            event.extra_columns.insert(header.clone(), value.to_string());
            continue;
        };

        match role {
            ReportColumn::Date => {
                event.date = parse_report_date(value);
                if event.date.is_none() && !value.is_empty() {
                    stats.invalid_dates += 1;
                    debug!("Line {}: unparsable date '{}'", line_number, value);
                }
            }
            ReportColumn::Latitude | ReportColumn::Longitude => {
                let coordinate = parse_coordinate(value);
                if coordinate.is_none() && !value.is_empty() {
                    stats.invalid_coordinates += 1;
                    debug!(
                        "Line {}: unparsable coordinate '{}' in '{}'",
                        line_number, value, header
                    );
                }
                if role == ReportColumn::Latitude {
                    event.latitude = coordinate;
                } else {
                    event.longitude = coordinate;
                }
            }
            ReportColumn::Verification => event.verified = normalize_verification(value),
            ReportColumn::Quality => {
                event.quality_level = parse_quality_level(value);
                if event.quality_level.is_none() && !value.is_empty() {
                    stats.invalid_quality_levels += 1;
                    debug!("Line {}: unparsable quality level '{}'", line_number, value);
                }
            }
            ReportColumn::Hour => event.hour = value.to_string(),
            ReportColumn::Locality => event.locality = value.to_string(),
            ReportColumn::Region => event.region = value.to_string(),
            ReportColumn::Phenomenon => event.phenomenon = value.to_string(),
            ReportColumn::Intensity => event.intensity = value.to_string(),
            ReportColumn::Description => event.description = value.to_string(),
        }
    }

    event.main_type = classify_phenomenon(&event.phenomenon);
    event.intensity_value = extract_intensity(&event.intensity);

    if event.intensity_value.is_none()
        && !event.intensity.is_empty()
        && event.intensity != NOT_SAMPLED_MARKER
    {
        stats.unparsed_intensities += 1;
        debug!(
            "Line {}: no number in intensity '{}'",
            line_number, event.intensity
        );
    }

    event
}
