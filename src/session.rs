//! The command loop.
//!
//! A [`Session`] owns the route store for the lifetime of the process. It
//! reads one line at a time, runs it, and writes the response, until the
//! user types `exit` or the input runs out.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{dispatch, CommandContext, CommandOutput, CommandRouter, ControlAction};
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::store::RouteStore;

/// Console text shown around the responses.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Banner printed before the first prompt.
    pub welcome: Option<String>,
    /// Prompt printed before each read.
    pub prompt: Option<String>,
}

impl SessionOptions {
    /// Builds options from the console config. `quiet` suppresses both texts.
    pub fn from_config(console: &ConsoleConfig, quiet: bool) -> Self {
        if quiet {
            return Self::default();
        }

        Self {
            welcome: console.show_welcome.then(|| console.welcome.clone()),
            prompt: Some(console.prompt.clone()),
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `exit`.
    ExitCommand,
    /// The input stream ended.
    EndOfInput,
}

/// A single run of the command loop.
#[derive(Debug, Default)]
pub struct Session {
    store: RouteStore,
    options: SessionOptions,
}

impl Session {
    /// Creates a session with an empty route store.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            store: RouteStore::new(),
            options,
        }
    }

    /// Returns the route store.
    pub fn store(&self) -> &RouteStore {
        &self.store
    }

    /// Parses and runs one command line.
    pub fn execute(&mut self, line: &str) -> CommandOutput {
        let command = CommandRouter::parse(line);
        debug!(?command, "Dispatching");
        let mut ctx = CommandContext {
            store: &mut self.store,
        };
        dispatch(&mut ctx, command)
    }

    /// Runs the loop until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<ExitReason> {
        info!("Session started");

        if let Some(welcome) = &self.options.welcome {
            writeln!(output, "{welcome}")?;
        }

        let mut line = String::new();
        loop {
            if let Some(prompt) = &self.options.prompt {
                write!(output, "{prompt}")?;
            }
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!(routes = self.store.len(), "End of input");
                return Ok(ExitReason::EndOfInput);
            }

            let command = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            match self.execute(command) {
                CommandOutput::Message(msg) => writeln!(output, "{msg}")?,
                CommandOutput::Control(ControlAction::Exit) => {
                    info!(routes = self.store.len(), "Exit requested");
                    output.flush()?;
                    return Ok(ExitReason::ExitCommand);
                }
            }
        }
    }
}
