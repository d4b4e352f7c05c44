//! Severe Weather Dashboard Library
//!
//! A Rust library for turning a published spreadsheet of severe-weather event
//! reports into typed, filterable records and dashboard summaries.
//!
//! This library provides tools for:
//! - Fetching the report spreadsheet (CSV export) over HTTP or from a local file
//! - Normalizing loosely formatted fields (dates, coordinates, phenomenon types,
//!   intensity descriptions) into typed [`Event`] records
//! - Filtering events by date range, phenomenon type and region
//! - Aggregating summary cards and chart series
//! - Exporting the filtered view back to CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod dashboard;
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod event_filter;
        pub mod exporter;
        pub mod report_parser;
        pub mod source_fetcher;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

// Re-export commonly used types
pub use app::dashboard::{Dashboard, DashboardCommand};
pub use app::models::{Event, FilterCriteria, MainType};
pub use config::Config;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, filtering and exporting severe-weather reports
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The report source answered with a non-success status
    #[error("Report source {url} answered with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The report source could not be reached
    #[error("Failed to fetch report source {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The report text was empty
    #[error("Report source returned no data")]
    EmptyInput,

    /// Export was requested for an empty filtered view
    #[error("No data to export")]
    EmptyExport,

    /// Filter criteria were inconsistent or unparsable
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a transport error
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error means the report data could not be loaded
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::HttpStatus { .. } | Self::Transport { .. } | Self::EmptyInput
        )
    }

    /// Message shown to the user; load failures collapse into one generic notice
    pub fn user_message(&self) -> String {
        if self.is_load_failure() {
            constants::LOAD_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
