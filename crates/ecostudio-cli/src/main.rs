mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod report;
mod templates;

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
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("EcoStudio CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Evaluate(args) => {
            info!("Dispatching to 'evaluate' command.");
            commands::evaluate::run(args)
        }
        Commands::Recommend(args) => {
            info!("Dispatching to 'recommend' command.");
            commands::recommend::run(args)
        }
        Commands::Compare(args) => {
            info!("Dispatching to 'compare' command.");
            commands::compare::run(args)
        }
        Commands::Templates(args) => {
            info!("Dispatching to 'templates' command.");
            commands::templates::run(args)
        }
    };

    match &result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    result
}
