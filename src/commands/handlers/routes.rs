//! Route command handlers (addroute, getdistance).

use tracing::{debug, warn};

use super::CommandContext;
use crate::commands::messages;
use crate::commands::output::CommandOutput;
use crate::commands::router::{AddRouteArgs, GetDistanceArgs};

/// Handle addroute command.
pub fn handle_add_route(ctx: &mut CommandContext<'_>, args: AddRouteArgs) -> CommandOutput {
    let confirmation = messages::route_added(&args.start, &args.end, &args.distance);

    match ctx.store.insert(args.start, args.end, args.distance) {
        Ok(outcome) => {
            debug!(?outcome, "addroute");
            CommandOutput::message(confirmation)
        }
        Err(full) => {
            warn!(capacity = ctx.store.capacity(), "{full}");
            CommandOutput::message(messages::NO_SPACE)
        }
    }
}

/// Handle getdistance command.
pub fn handle_get_distance(ctx: &CommandContext<'_>, args: &GetDistanceArgs) -> CommandOutput {
    match ctx.store.find(&args.start, &args.end) {
        Some(distance) => {
            CommandOutput::message(messages::distance(&args.start, &args.end, distance))
        }
        None => CommandOutput::message(messages::no_route(&args.start, &args.end)),
    }
}
