//! Data models for severe-weather event reports
//!
//! This module contains the normalized event record produced by the report
//! parser, the closed phenomenon classification, and the filter criteria
//! consumed by the filter engine.

use crate::{Error, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Phenomenon Classification
// =============================================================================

/// Main phenomenon type derived from the free-text phenomenon column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MainType {
    Hail,
    Gust,
    Tornado,
    Funnel,
    Waterspout,
    #[default]
    Other,
}

impl MainType {
    /// All types in classification priority order
    pub const ALL: [MainType; 6] = [
        MainType::Hail,
        MainType::Gust,
        MainType::Tornado,
        MainType::Funnel,
        MainType::Waterspout,
        MainType::Other,
    ];

    /// Short code used by the report sheet and the export
    pub fn code(&self) -> &'static str {
        match self {
            MainType::Hail => "GRA",
            MainType::Gust => "RAF",
            MainType::Tornado => "TOR",
            MainType::Funnel => "FUN",
            MainType::Waterspout => "TRB",
            MainType::Other => "OTRO",
        }
    }

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            MainType::Hail => "HAIL",
            MainType::Gust => "GUST",
            MainType::Tornado => "TORNADO",
            MainType::Funnel => "FUNNEL",
            MainType::Waterspout => "WATERSPOUT",
            MainType::Other => "OTHER",
        }
    }

    /// Chart label
    pub fn label(&self) -> &'static str {
        match self {
            MainType::Hail => "Granizo",
            MainType::Gust => "Ráfaga",
            MainType::Tornado => "Tornado",
            MainType::Funnel => "Funnel Cloud",
            MainType::Waterspout => "Tromba",
            MainType::Other => "Otros",
        }
    }
}

impl fmt::Display for MainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MainType {
    type Err = Error;

    /// Accepts the short code or the English name, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_uppercase();
        MainType::ALL
            .into_iter()
            .find(|t| t.code() == wanted || t.name() == wanted)
            .ok_or_else(|| {
                Error::invalid_filter(format!(
                    "Unknown phenomenon type '{}' (expected one of: {})",
                    s,
                    MainType::ALL.map(|t| t.code()).join(", ")
                ))
            })
    }
}

// =============================================================================
// Event Record
// =============================================================================

/// One normalized severe-weather report
///
/// Typed fields are coerced best-effort from the source text; a field that
/// fails to parse is simply absent. Text columns are kept trimmed and
/// unquoted, and columns the parser does not recognise are kept verbatim in
/// `extra_columns`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Report date (from a `YYYYMMDD` token)
    pub date: Option<NaiveDate>,

    /// Hour of day as written in the sheet (UTC)
    pub hour: String,

    pub locality: String,

    /// Administrative region (departamento)
    pub region: String,

    /// Free-text phenomenon type the classification was derived from
    pub phenomenon: String,

    pub main_type: MainType,

    /// Free-text intensity / size / scale description
    pub intensity: String,

    /// First number found in `intensity`
    pub intensity_value: Option<f64>,

    /// Upper-cased verification token ("SI" / "NO" by convention)
    pub verified: String,

    /// Quality level (1-3 by convention)
    pub quality_level: Option<i32>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub description: String,

    /// Unrecognised columns, keyed by header
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra_columns: BTreeMap<String, String>,
}

impl Event {
    /// Whether the report is marked as verified
    pub fn is_verified(&self) -> bool {
        self.verified == crate::constants::VERIFIED_YES
    }

    /// `YYYY-MM` bucket key, if the event is dated
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }

    /// Calendar year, if the event is dated
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Date as shown in the table (`d/m/yyyy`)
    pub fn display_date(&self) -> Option<String> {
        self.date
            .map(|d| format!("{}/{}/{}", d.day(), d.month(), d.year()))
    }

    /// Value of an unrecognised column
    pub fn extra(&self, header: &str) -> Option<&str> {
        self.extra_columns.get(header).map(String::as_str)
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// Criteria for narrowing the event list; every supplied criterion must hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive start date
    pub start_date: Option<NaiveDate>,

    /// Inclusive end date
    pub end_date: Option<NaiveDate>,

    pub main_type: Option<MainType>,

    /// Exact region name
    pub region: Option<String>,
}

impl FilterCriteria {
    /// Criteria that let every event through
    pub fn new() -> Self {
        Self::default()
    }

    /// Date range from the same day one year earlier through `today`
    pub fn last_year(today: NaiveDate) -> Self {
        Self {
            start_date: today.checked_sub_months(Months::new(12)),
            end_date: Some(today),
            ..Self::default()
        }
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_main_type(mut self, main_type: MainType) -> Self {
        self.main_type = Some(main_type);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.main_type.is_none()
            && self.region.is_none()
    }

    /// Check the criteria are consistent
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(Error::invalid_filter(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
        }

        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(Error::invalid_filter("region cannot be empty"));
            }
        }

        Ok(())
    }
}
