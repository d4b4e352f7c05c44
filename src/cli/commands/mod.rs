//! Command implementations for the severe weather CLI
//!
//! Each command is implemented in its own module; [`shared`] holds logging,
//! configuration and report loading common to all of them.

pub mod export;
pub mod regions;
pub mod shared;
pub mod show;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner
///
/// Installs logging, then dispatches to the subcommand handler:
/// - `show`: Summary cards, chart series and a table page
/// - `export`: CSV export of the filtered view
/// - `regions`: Region filter options
pub async fn run(command: Commands) -> Result<()> {
    shared::setup_logging(command.common())?;

    match command {
        Commands::Show(args) => show::run_show(args).await,
        Commands::Export(args) => export::run_export(args).await,
        Commands::Regions(args) => regions::run_regions(args).await,
    }
}
