//! Report parser for severe-weather event spreadsheets
//!
//! This module turns the CSV export of the report spreadsheet into an ordered
//! list of typed [`Event`](crate::app::models::Event) records. Parsing is total
//! over any non-empty input: a malformed field degrades to an absent or empty
//! value for that field only and never aborts the row or the file.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting and parsing orchestration
//! - [`column_mapping`] - Header analysis and column role resolution
//! - [`record_parser`] - Conversion of one data line into an event
//! - [`field_parsers`] - Best-effort coercion of individual fields
//! - [`classification`] - Phenomenon type classification
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use severe_weather_dashboard::app::services::report_parser::parse_reports;
//!
//! # fn example() -> severe_weather_dashboard::Result<()> {
//! let text = "Fecha,Departamento,Tipo de fenómeno CORR (Granizo/Ráfaga/Tornado)\n\
//!             20240115,Canelones,Granizo";
//! let result = parse_reports(text)?;
//!
//! assert_eq!(result.events.len(), 1);
//! assert_eq!(result.events[0].region, "Canelones");
//! # Ok(())
//! # }
//! ```

pub mod classification;
pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classification::classify_phenomenon;
pub use column_mapping::{ColumnMapping, ReportColumn};
pub use field_parsers::{extract_intensity, parse_report_date};
pub use parser::parse_reports;
pub use stats::{ParseResult, ParseStats};
