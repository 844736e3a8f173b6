//! Command parsing and dispatch.
//!
//! This module keeps parsing separate from execution so that command lines
//! can be unit tested without a route store.

pub mod definitions;
pub mod handlers;
pub mod messages;
pub mod output;
pub mod router;
pub mod tokenizer;

pub use definitions::{find_command, CommandDef, CommandKind, COMMANDS};
pub use handlers::{dispatch, CommandContext};
pub use output::{CommandOutput, ControlAction};
pub use router::{AddRouteArgs, Command, CommandRouter, GetDistanceArgs, InvalidReason};
