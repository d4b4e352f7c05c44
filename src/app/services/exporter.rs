//! CSV export of the filtered view
//!
//! Writes the fixed 11-column layout. Dates are written as `YYYYMMDD` and
//! types as their short code, so an exported file can be read back by the
//! report parser.

use crate::app::models::Event;
use crate::constants::{EXPORT_FILE_PREFIX, FIELD_DELIMITER, QUOTE_CHAR, headers};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::borrow::Borrow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the export document for the given events
///
/// Returns [`Error::EmptyExport`] when there is nothing to export.
pub fn render_export<E: Borrow<Event>>(events: &[E]) -> Result<String> {
    if events.is_empty() {
        return Err(Error::EmptyExport);
    }

    let delimiter = FIELD_DELIMITER.to_string();
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(headers::EXPORT.join(&delimiter));

    for event in events {
        lines.push(export_row(event.borrow()).join(&delimiter));
    }

    Ok(lines.join("\n"))
}

/// Values of one export row, in header order
pub fn export_row(event: &Event) -> [String; 11] {
    [
        event
            .date
            .map(|d| d.format("%Y%m%d").to_string())
            .unwrap_or_default(),
        event.hour.clone(),
        quote(&event.locality),
        quote(&event.region),
        event.main_type.code().to_string(),
        quote(&event.intensity),
        event.verified.clone(),
        optional(event.quality_level),
        optional(event.latitude),
        optional(event.longitude),
        quote(&event.description),
    ]
}

/// File name for an export produced on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}_{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Write the export document into `directory`
///
/// Nothing is written when `events` is empty.
pub fn write_export<E: Borrow<Event>>(
    events: &[E],
    directory: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let document = render_export(events)?;

    std::fs::create_dir_all(directory).map_err(|e| {
        Error::io(
            format!("Failed to create export directory {}", directory.display()),
            e,
        )
    })?;

    let path = directory.join(export_file_name(date));
    std::fs::write(&path, document)
        .map_err(|e| Error::io(format!("Failed to write export {}", path.display()), e))?;

    info!("Exported {} events to {}", events.len(), path.display());
    Ok(path)
}

/// Wrap a text value in quotes, doubling embedded quotes
fn quote(value: &str) -> String {
    let escaped = value.replace(QUOTE_CHAR, "\"\"");
    format!("{}{}{}", QUOTE_CHAR, escaped, QUOTE_CHAR)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
