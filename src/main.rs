use anyhow::Context;
use clap::Parser;
use severe_weather_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = match build_runtime() {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(command) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        }
    });

    match result {
        Some(Ok(())) => process::exit(0),
        Some(Err(error)) => {
            // Load failures collapse into one generic notice; details are logged at debug
            eprintln!("Error: {}", error.user_message());
            process::exit(1);
        }
        None => {
            eprintln!("\nInterrupted");
            process::exit(130);
        }
    }
}

fn build_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("Failed to create async runtime")
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Severe Weather Dashboard - Event Report Explorer");
    println!("================================================");
    println!();
    println!("Load the published severe-weather report sheet, browse summaries,");
    println!("charts and the event table, and export the filtered view to CSV.");
    println!();
    println!("USAGE:");
    println!("    severe-weather <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    show        Show summary cards, charts and the event table");
    println!("    export      Export the filtered view as CSV");
    println!("    regions     List the regions present in the report");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Dashboard for the last twelve months:");
    println!("    severe-weather show --last-year");
    println!();
    println!("    # Hail reports in one region, as JSON:");
    println!("    severe-weather show --type GRA --region Canelones --format json");
    println!();
    println!("    # Export tornado reports from a local copy of the sheet:");
    println!("    severe-weather export --source reports.csv --type tornado --output-dir ./exports");
    println!();
    println!("For detailed help on any command, use:");
    println!("    severe-weather <COMMAND> --help");
}
