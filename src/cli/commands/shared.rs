//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and the spinner-wrapped
//! report load used by every subcommand.

use crate::app::dashboard::Dashboard;
use crate::app::services::source_fetcher::ReportSource;
use crate::cli::args::CommonArgs;
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("severe_weather_dashboard={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &CommonArgs) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(source) = &args.source {
        config.source.location = source.clone();
    }
}

/// Fetch and parse the report, with a spinner while the fetch is outstanding
///
/// The spinner is cleared on both success and failure.
pub async fn load_dashboard(source: &ReportSource, show_progress: bool) -> Result<Dashboard> {
    let spinner = if show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Loading report data...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let result = Dashboard::load(source).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if let Err(error) = &result {
        debug!("Report load failed: {:#}", error);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::cli::args::Args;

    fn common(argv: &[&str]) -> CommonArgs {
        let mut full = vec!["severe-weather", "regions"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full)
            .unwrap()
            .command
            .unwrap()
            .common()
            .clone()
    }

    #[test]
    fn test_cli_source_overrides_config() {
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &common(&["--source", "local.csv"]));
        assert_eq!(config.source.location, "local.csv");

        let mut config = Config::default().with_source("from-file.csv");
        apply_cli_overrides(&mut config, &common(&[]));
        assert_eq!(config.source.location, "from-file.csv");
    }

    #[test]
    fn test_explicit_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "display": { "top_regions": 5 } }"#).unwrap();

        let config = load_configuration(&common(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(config.display.top_regions, 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "display": { "page_size": 0 } }"#).unwrap();

        assert!(load_configuration(&common(&["--config", path.to_str().unwrap()])).is_err());
    }

    #[tokio::test]
    async fn test_load_dashboard_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.csv");
        std::fs::write(&path, "Fecha,Departamento\n20240101,Salto\n20240102,Rocha").unwrap();

        let dashboard = load_dashboard(&ReportSource::File(path), false)
            .await
            .unwrap();
        assert_eq!(dashboard.all_events().len(), 2);
    }
}
