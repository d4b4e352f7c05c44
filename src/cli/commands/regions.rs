//! Regions command implementation

use super::shared::{load_configuration, load_dashboard};
use crate::cli::args::{OutputFormat, RegionsArgs};
use crate::cli::render::{render_regions_human, render_regions_json};
use crate::Result;

/// Regions command runner
///
/// Lists the distinct regions of the full report, i.e. the region filter options.
pub async fn run_regions(args: RegionsArgs) -> Result<()> {
    let config = load_configuration(&args.common)?;
    let dashboard = load_dashboard(&config.report_source(), args.common.show_progress()).await?;
    let regions = dashboard.regions();

    let output = match args.output_format {
        OutputFormat::Human => render_regions_human(&regions),
        OutputFormat::Json => render_regions_json(&regions)?,
    };

    println!("{}", output);
    Ok(())
}
