//! Parsing statistics and result structures for report parsing
//!
//! Field degradations are counted here instead of being raised: the parser
//! never fails a row, so these counters are the only trace of messy input.

use super::column_mapping::ReportColumn;
use crate::app::models::Event;

/// Parsing result with events and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Events in input order, one per data line
    pub events: Vec<Event>,

    /// Parsing statistics
    pub stats: ParseStats,

    /// Recognised columns that were absent from the header
    pub missing_columns: Vec<ReportColumn>,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of data lines encountered
    pub total_records: usize,

    /// Rows with fewer values than headers
    pub short_rows: usize,

    /// Rows with more values than headers
    pub long_rows: usize,

    /// Non-empty dates that were not valid `YYYYMMDD` tokens
    pub invalid_dates: usize,

    /// Non-empty coordinates that were not numbers
    pub invalid_coordinates: usize,

    /// Non-empty quality levels that were not integers
    pub invalid_quality_levels: usize,

    /// Intensity texts without any number (not-sampled markers excluded)
    pub unparsed_intensities: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of fields that degraded to absent
    pub fn degraded_fields(&self) -> usize {
        self.invalid_dates
            + self.invalid_coordinates
            + self.invalid_quality_levels
            + self.unparsed_intensities
    }

    /// Rows whose value count did not match the header
    pub fn misaligned_rows(&self) -> usize {
        self.short_rows + self.long_rows
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} records | {} misaligned rows | {} degraded fields \
             (dates: {}, coordinates: {}, quality: {}, intensity: {})",
            self.total_records,
            self.misaligned_rows(),
            self.degraded_fields(),
            self.invalid_dates,
            self.invalid_coordinates,
            self.invalid_quality_levels,
            self.unparsed_intensities
        )
    }
}
