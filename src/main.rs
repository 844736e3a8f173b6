//! Route Store - an interactive store for distances between named locations.

use std::fs::File;
use std::io::{self, BufReader};

use route_store::cli::Cli;
use route_store::config::Config;
use route_store::error::{Result, RouteStoreError};
use route_store::logging;
use route_store::session::{ExitReason, Session, SessionOptions};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    if cli.is_interactive() {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    match run(&cli) {
        Ok(reason) => info!(?reason, "Session ended"),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ExitReason> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let mut session = Session::new(SessionOptions::from_config(&config.console, cli.quiet));
    let stdout = io::stdout();

    match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                RouteStoreError::config(format!(
                    "Failed to open script {}: {e}",
                    path.display()
                ))
            })?;
            session.run(BufReader::new(file), stdout.lock())
        }
        None => session.run(io::stdin().lock(), stdout.lock()),
    }
}
