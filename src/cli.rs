//! Command-line argument parsing.
//!
//! Uses clap to parse the few start-up flags. Everything else happens
//! through the interactive command protocol.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// An interactive store for distances between named locations.
#[derive(Parser, Debug)]
#[command(name = "routestore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "ROUTE_STORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of standard input
    #[arg(short = 's', long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Do not print the welcome banner or prompts
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns true if commands come from a person at a terminal.
    pub fn is_interactive(&self) -> bool {
        self.script.is_none() && std::io::stdin().is_terminal()
    }
}
