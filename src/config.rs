//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! environment variables. CLI arguments are applied last by the command layer
//! before [`Config::validate`] runs.

use crate::app::services::source_fetcher::ReportSource;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL, DEFAULT_TOP_REGIONS,
    ENV_EXPORT_DIR, ENV_SOURCE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub export: ExportConfig,
    pub display: DisplayConfig,
}

/// Where the report document is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the published sheet, or a local file path
    pub location: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory; the user's download directory when unset
    pub directory: Option<PathBuf>,
}

/// Terminal display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Table rows per page
    pub page_size: usize,

    /// Length of the top-regions chart
    pub top_regions: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            top_regions: DEFAULT_TOP_REGIONS,
        }
    }
}

impl ExportConfig {
    /// Directory exports are written to
    ///
    /// Falls back to the user's download directory, then the working directory.
    pub fn resolve_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::serialization(format!("Invalid config file '{}'", path.display()), e)
        })
    }

    /// Load defaults, then the optional file, then environment overrides
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply environment overrides using the given variable lookup
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(source) = lookup(ENV_SOURCE).filter(|v| !v.trim().is_empty()) {
            debug!("Report source overridden by {}", ENV_SOURCE);
            self.source.location = source;
        }

        if let Some(directory) = lookup(ENV_EXPORT_DIR).filter(|v| !v.trim().is_empty()) {
            debug!("Export directory overridden by {}", ENV_EXPORT_DIR);
            self.export.directory = Some(PathBuf::from(directory));
        }
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<()> {
        if self.source.location.trim().is_empty() {
            return Err(Error::configuration("Report source cannot be empty"));
        }

        if self.display.page_size == 0 {
            return Err(Error::configuration("Page size must be greater than 0"));
        }

        if self.display.top_regions == 0 {
            return Err(Error::configuration(
                "Top regions count must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Report source described by this configuration
    pub fn report_source(&self) -> ReportSource {
        ReportSource::parse(&self.source.location)
    }

    /// Set the report source
    pub fn with_source(mut self, location: impl Into<String>) -> Self {
        self.source.location = location.into();
        self
    }

    /// Set the export directory
    pub fn with_export_directory(mut self, directory: PathBuf) -> Self {
        self.export.directory = Some(directory);
        self
    }

    /// Set the table page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.display.page_size = page_size;
        self
    }
}
