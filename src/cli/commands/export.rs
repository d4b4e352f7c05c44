//! Export command implementation
//!
//! Writes the filtered view as `fenomenos_severos_<date>.csv`. An empty view
//! produces a notice and no file.

use super::shared::{load_configuration, load_dashboard};
use crate::app::dashboard::{DashboardCommand, DashboardUpdate};
use crate::cli::args::ExportArgs;
use crate::constants::EMPTY_EXPORT_MESSAGE;
use crate::{Error, Result};
use colored::*;
use tracing::{debug, warn};

/// Export command runner
pub async fn run_export(args: ExportArgs) -> Result<()> {
    debug!("Export arguments: {:?}", args);

    let mut config = load_configuration(&args.common)?;
    if let Some(directory) = &args.output_dir {
        config.export.directory = Some(directory.clone());
    }

    let today = chrono::Utc::now().date_naive();
    let criteria = args.filters.to_criteria(today)?;

    let mut dashboard =
        load_dashboard(&config.report_source(), args.common.show_progress()).await?;
    dashboard.dispatch(DashboardCommand::ApplyFilters(criteria))?;

    let command = DashboardCommand::Export {
        directory: config.export.resolve_directory(),
        today,
    };

    match dashboard.dispatch(command) {
        Ok(DashboardUpdate::Exported(path)) => {
            println!(
                "{} {} events to {}",
                "Exported".bright_green(),
                dashboard.filtered_events().len().to_string().bright_white().bold(),
                path.display()
            );
            Ok(())
        }
        Ok(update) => {
            debug!("Unexpected export outcome: {:?}", update);
            Ok(())
        }
        Err(Error::EmptyExport) => {
            warn!("Export skipped: filtered view is empty");
            println!("{}", EMPTY_EXPORT_MESSAGE.bright_yellow());
            Ok(())
        }
        Err(error) => Err(error),
    }
}
