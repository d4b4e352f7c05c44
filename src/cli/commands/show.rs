//! Show command implementation
//!
//! Loads the report, applies the filter flags and prints the dashboard
//! snapshot as a human-readable report or JSON.

use super::shared::{load_configuration, load_dashboard};
use crate::app::dashboard::DashboardCommand;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::cli::render::{render_dashboard_human, render_dashboard_json};
use crate::Result;
use tracing::{debug, info};

/// Show command runner
pub async fn run_show(args: ShowArgs) -> Result<()> {
    debug!("Show arguments: {:?}", args);

    let config = load_configuration(&args.common)?;
    let criteria = args
        .filters
        .to_criteria(chrono::Utc::now().date_naive())?;

    let mut dashboard =
        load_dashboard(&config.report_source(), args.common.show_progress()).await?;
    dashboard.dispatch(DashboardCommand::ApplyFilters(criteria))?;

    let view = dashboard.view_with_top_regions(config.display.top_regions);
    let page = args.page as usize;
    let page_size = args.page_size.unwrap_or(config.display.page_size).max(1);
    let total_loaded = dashboard.all_events().len();

    let output = match args.output_format {
        OutputFormat::Human => {
            render_dashboard_human(&view, dashboard.criteria(), total_loaded, page, page_size)
        }
        OutputFormat::Json => {
            render_dashboard_json(&view, dashboard.criteria(), total_loaded, page, page_size)?
        }
    };

    println!("{}", output);
    info!("Dashboard shown for {} events", view.rows.len());
    Ok(())
}
