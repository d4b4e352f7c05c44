//! Retrieval of the report document
//!
//! The report is normally the CSV export of a published spreadsheet, fetched
//! with a single GET. A local file can stand in for the URL. There is no
//! retry: a failed fetch is reported once and the caller decides what to do.

use crate::{Error, Result};
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Where the report document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Url(String),
    File(PathBuf),
}

impl ReportSource {
    /// Interpret a source string: `http://` / `https://` is a URL, anything else a path
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        if source.starts_with("http://") || source.starts_with("https://") {
            ReportSource::Url(source.to_string())
        } else {
            ReportSource::File(PathBuf::from(source))
        }
    }
}

impl FromStr for ReportSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::configuration("Report source cannot be empty"));
        }
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::Url(url) => f.write_str(url),
            ReportSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches report documents
#[derive(Debug, Clone, Default)]
pub struct ReportFetcher {
    client: Client,
}

impl ReportFetcher {
    /// Create a fetcher with a default HTTP client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fetcher around a preconfigured HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the raw report text
    pub async fn fetch(&self, source: &ReportSource) -> Result<String> {
        match source {
            ReportSource::Url(url) => self.fetch_url(url).await,
            ReportSource::File(path) => {
                debug!("Reading report from {}", path.display());
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    Error::io(format!("Failed to read report file {}", path.display()), e)
                })
            }
        }
    }

    async fn fetch_url(&self, url: &str) -> Result<String> {
        debug!("Fetching report from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(url, status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(url, e))?;

        info!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

/// Fetch the raw report text with a one-off fetcher
pub async fn fetch_report_text(source: &ReportSource) -> Result<String> {
    ReportFetcher::new().fetch(source).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            ReportSource::parse("https://example.org/sheet?format=csv"),
            ReportSource::Url("https://example.org/sheet?format=csv".to_string())
        );
        assert_eq!(
            ReportSource::parse(" http://localhost:8080/a.csv "),
            ReportSource::Url("http://localhost:8080/a.csv".to_string())
        );
        assert_eq!(
            ReportSource::parse("data/reports.csv"),
            ReportSource::File(PathBuf::from("data/reports.csv"))
        );
        assert!("   ".parse::<ReportSource>().is_err());
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.csv");
        std::fs::write(&path, "Fecha,Departamento\n20240101,Salto").unwrap();

        let text = fetch_report_text(&ReportSource::File(path)).await.unwrap();
        assert!(text.starts_with("Fecha"));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_load_failure() {
        let source = ReportSource::File(PathBuf::from("/nonexistent/reports.csv"));
        let error = fetch_report_text(&source).await.unwrap_err();

        assert!(matches!(error, Error::Io { .. }));
        assert!(error.is_load_failure());
    }
}
