//! User-facing response text.
//!
//! The wording and punctuation here are the protocol: scripts driving the
//! store match on these lines.

use crate::store::{Distance, Location};

/// Banner printed once before the first prompt.
pub const WELCOME: &str = "Welcome to SimpleRouteStore!";

/// Prompt printed before each command is read.
pub const PROMPT: &str = "Enter command:";

/// Response when every slot is taken.
pub const NO_SPACE: &str = "No more space to store locations";

/// Confirmation for a stored route.
pub fn route_added(start: &Location, end: &Location, distance: &Distance) -> String {
    format!("Route from {start} to {end} with distance {distance}km added")
}

/// Result of a successful lookup. The distance reads back as it was typed.
pub fn distance(start: &Location, end: &Location, distance: &Distance) -> String {
    format!("Distance from {start} to {end} is {distance}")
}

/// Result of a lookup for a pair that was never stored.
pub fn no_route(start: &Location, end: &Location) -> String {
    format!("No route exists from {start} to {end}!")
}

/// Response to anything that is not a well-formed command.
pub fn invalid_format(line: &str) -> String {
    format!("invalid command format :{line}")
}
