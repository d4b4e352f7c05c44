//! Command-line argument definitions for the severe weather dashboard
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::models::{FilterCriteria, MainType};
use crate::Result;
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the severe weather dashboard
///
/// Loads the published severe-weather report sheet and shows summaries,
/// charts and the event table in the terminal, or exports the filtered view.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "severe-weather",
    version,
    about = "Explore and export severe-weather event reports",
    long_about = "Loads the published spreadsheet of severe-weather event reports (hail, \
                  gusts, tornadoes, funnel clouds, waterspouts), normalizes its loosely \
                  formatted fields and shows summary cards, chart series and the event \
                  table in the terminal. The filtered view can be exported back to CSV."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show summary cards, chart series and a table page
    Show(ShowArgs),
    /// Export the filtered view as CSV
    Export(ExportArgs),
    /// List the regions present in the report
    Regions(RegionsArgs),
}

impl Commands {
    /// Arguments shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Show(args) => &args.common,
            Commands::Export(args) => &args.common,
            Commands::Regions(args) => &args.common,
        }
    }
}

/// Source, configuration and logging options
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Report source
    ///
    /// A URL (http:// or https://) of the CSV export, or a local CSV file.
    /// Defaults to the published report sheet.
    #[arg(
        short = 's',
        long = "source",
        value_name = "URL|FILE",
        help = "Report source URL or local CSV file"
    )]
    pub source: Option<String>,

    /// Path to configuration file
    ///
    /// JSON configuration file. If not specified, looks for
    /// <config dir>/severe-weather/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl CommonArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the loading spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Event filter options
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long = "from", value_name = "DATE", conflicts_with = "last_year")]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long = "to", value_name = "DATE", conflicts_with = "last_year")]
    pub to: Option<NaiveDate>,

    /// Phenomenon type
    ///
    /// Short code (GRA, RAF, TOR, FUN, TRB, OTRO) or English name
    /// (hail, gust, tornado, funnel, waterspout, other).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub main_type: Option<MainType>,

    /// Exact region name
    #[arg(short = 'r', long = "region", value_name = "NAME")]
    pub region: Option<String>,

    /// Only the year up to today
    #[arg(long = "last-year", help = "Restrict to the last twelve months")]
    pub last_year: bool,
}

impl FilterArgs {
    /// Build filter criteria, resolving `--last-year` against `today`
    pub fn to_criteria(&self, today: NaiveDate) -> Result<FilterCriteria> {
        let mut criteria = if self.last_year {
            FilterCriteria::last_year(today)
        } else {
            FilterCriteria {
                start_date: self.from,
                end_date: self.to,
                ..FilterCriteria::default()
            }
        };

        criteria.main_type = self.main_type;
        criteria.region = self.region.clone();

        criteria.validate()?;
        Ok(criteria)
    }
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the dashboard"
    )]
    pub output_format: OutputFormat,

    /// Table page to show (1-based)
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub page: u32,

    /// Table rows per page (overrides configuration)
    #[arg(long = "page-size", value_name = "ROWS")]
    pub page_size: Option<usize>,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory the export is written to
    ///
    /// Defaults to the configured export directory, then the user's
    /// download directory, then the current directory.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the regions command
#[derive(Debug, Clone, Parser)]
pub struct RegionsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}
