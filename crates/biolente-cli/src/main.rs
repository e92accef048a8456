mod cli;
mod commands;
mod config;
mod display;
mod error;
mod logging;
mod paths;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("Biolente CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let app_config = config::build_config(&cli)?;

    let command_result = match cli.command {
        Commands::Palette(args) => {
            info!("Dispatching to 'palette' command.");
            commands::palette::run(args, &app_config)
        }
        Commands::Contrast(args) => {
            info!("Dispatching to 'contrast' command.");
            commands::contrast::run(args, &app_config)
        }
        Commands::Font(args) => {
            info!("Dispatching to 'font' command.");
            commands::font::run(args, &app_config)
        }
        Commands::Prefs(args) => {
            info!("Dispatching to 'prefs' command.");
            commands::prefs::run(args, &app_config)
        }
        Commands::Classify(args) => {
            info!("Dispatching to 'classify' command.");
            commands::classify::run(args)
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }

    command_result
}
