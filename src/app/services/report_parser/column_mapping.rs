//! Column mapping for report spreadsheet headers
//!
//! This module resolves each header to the role it plays in an event record.
//! Headers are matched by exact name against both the source-sheet header and
//! the header written by the exporter, so exported files can be re-read.
//! Latitude and longitude are matched by substring, as the sheet decorates
//! them with units.

use crate::constants::headers;
use std::collections::HashMap;

/// Role of a recognised report column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportColumn {
    Date,
    Hour,
    Locality,
    Region,
    Phenomenon,
    Intensity,
    Verification,
    Quality,
    Latitude,
    Longitude,
    Description,
}

impl ReportColumn {
    /// Every recognised column
    pub const ALL: [ReportColumn; 11] = [
        ReportColumn::Date,
        ReportColumn::Hour,
        ReportColumn::Locality,
        ReportColumn::Region,
        ReportColumn::Phenomenon,
        ReportColumn::Intensity,
        ReportColumn::Verification,
        ReportColumn::Quality,
        ReportColumn::Latitude,
        ReportColumn::Longitude,
        ReportColumn::Description,
    ];

    /// Exact header names accepted for this column
    pub fn accepted_headers(&self) -> &'static [&'static str] {
        match self {
            ReportColumn::Date => &[headers::DATE],
            ReportColumn::Hour => &[headers::HOUR, headers::EXPORT_HOUR],
            ReportColumn::Locality => &[headers::LOCALITY],
            ReportColumn::Region => &[headers::REGION],
            ReportColumn::Phenomenon => &[headers::PHENOMENON, headers::EXPORT_PHENOMENON],
            ReportColumn::Intensity => &[headers::INTENSITY, headers::EXPORT_INTENSITY],
            ReportColumn::Verification => &[headers::VERIFICATION, headers::EXPORT_VERIFICATION],
            ReportColumn::Quality => &[headers::QUALITY, headers::EXPORT_QUALITY],
            ReportColumn::Latitude => &[headers::LATITUDE],
            ReportColumn::Longitude => &[headers::LONGITUDE],
            ReportColumn::Description => &[headers::DESCRIPTION, headers::EXPORT_DESCRIPTION],
        }
    }

    /// Resolve a cleaned header name to its role
    pub fn from_header(header: &str) -> Option<Self> {
        if let Some(column) = Self::ALL
            .into_iter()
            .find(|column| column.accepted_headers().contains(&header))
        {
            return Some(column);
        }

        if header.contains(headers::LATITUDE_MARKER) {
            Some(ReportColumn::Latitude)
        } else if header.contains(headers::LONGITUDE_MARKER) {
            Some(ReportColumn::Longitude)
        } else {
            None
        }
    }
}

/// Header layout of one report document
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Cleaned header names in input order
    pub headers: Vec<String>,

    /// Role of each header position; `None` for opaque columns
    pub roles: Vec<Option<ReportColumn>>,

    /// Position of the first header carrying each role
    pub role_to_index: HashMap<ReportColumn, usize>,
}

impl ColumnMapping {
    /// Analyze cleaned header names
    ///
    /// When two headers resolve to the same role the first one wins and the
    /// later ones are kept as opaque columns.
    pub fn analyze(headers: Vec<String>) -> Self {
        let mut roles = Vec::with_capacity(headers.len());
        let mut role_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let role = ReportColumn::from_header(header)
                .filter(|role| !role_to_index.contains_key(role));

            if let Some(role) = role {
                role_to_index.insert(role, index);
            }
            roles.push(role);
        }

        ColumnMapping {
            headers,
            roles,
            role_to_index,
        }
    }

    /// Get the index for a given column role
    pub fn get_index(&self, column: ReportColumn) -> Option<usize> {
        self.role_to_index.get(&column).copied()
    }

    /// Check if a column role is present
    pub fn has_column(&self, column: ReportColumn) -> bool {
        self.role_to_index.contains_key(&column)
    }

    /// Recognised columns absent from the header
    pub fn missing_columns(&self) -> Vec<ReportColumn> {
        ReportColumn::ALL
            .into_iter()
            .filter(|column| !self.has_column(*column))
            .collect()
    }

    /// Number of header columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}
