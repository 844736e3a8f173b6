//! Command handlers.
//!
//! Each handler takes the command context and its parsed arguments and
//! returns a [`CommandOutput`].

pub mod routes;
pub mod system;

use super::output::CommandOutput;
use super::router::Command;
use crate::store::RouteStore;

/// Context provided to command handlers.
pub struct CommandContext<'a> {
    /// Route table the session owns.
    pub store: &'a mut RouteStore,
}

/// Runs a parsed command against the context.
pub fn dispatch(ctx: &mut CommandContext<'_>, command: Command) -> CommandOutput {
    match command {
        Command::AddRoute(args) => routes::handle_add_route(ctx, args),
        Command::GetDistance(args) => routes::handle_get_distance(ctx, &args),
        Command::Exit => system::handle_exit(),
        Command::Invalid { line, reason } => system::handle_invalid(&line, &reason),
    }
}
