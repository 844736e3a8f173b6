//! System command handlers (exit, invalid input).

use tracing::debug;

use crate::commands::messages;
use crate::commands::output::CommandOutput;
use crate::commands::router::InvalidReason;

/// Handle exit command.
pub fn handle_exit() -> CommandOutput {
    CommandOutput::exit()
}

/// Handle a line that is not a valid command.
pub fn handle_invalid(line: &str, reason: &InvalidReason) -> CommandOutput {
    debug!(?reason, "Rejected command");
    CommandOutput::message(messages::invalid_format(line))
}
