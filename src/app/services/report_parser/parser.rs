//! Core report parser implementation
//!
//! This module splits the document into header and data lines and drives the
//! per-record conversion.

use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::split_fields;
use super::record_parser::parse_event_record;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parse a report document into events
///
/// The first line is the header; each following line becomes exactly one
/// event, in input order. The only failure is an empty document.
pub fn parse_reports(text: &str) -> Result<ParseResult> {
    let content = text.trim_start_matches('\u{feff}').trim();
    if content.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut lines = content.split('\n');
    let header_line = lines.next().unwrap_or_default();
    let mapping = ColumnMapping::analyze(split_fields(header_line));

    debug!(
        "Column mapping: {} columns, {} recognised",
        mapping.width(),
        mapping.role_to_index.len()
    );

    let missing_columns = mapping.missing_columns();
    if !missing_columns.is_empty() {
        warn!(
            "Report header lacks expected columns: {:?}",
            missing_columns
        );
    }

    let mut stats = ParseStats::new();
    let mut events = Vec::new();

    for (offset, line) in lines.enumerate() {
        stats.total_records += 1;
        let values = split_fields(line);
        events.push(parse_event_record(&values, &mapping, offset + 2, &mut stats));
    }

    info!("Parsed {} events: {}", events.len(), stats.summary());

    Ok(ParseResult {
        events,
        stats,
        missing_columns,
    })
}
