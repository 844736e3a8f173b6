//! Command parsing and routing.
//!
//! Parses a raw input line into a structured command that can be dispatched
//! to a handler. Parsing never touches the route store.

use super::definitions::{find_command, CommandDef, CommandKind};
use super::tokenizer::split_keyword;
use crate::store::{Distance, Location};

/// Arguments for the addroute command.
#[derive(Debug, Clone)]
pub struct AddRouteArgs {
    /// Start location as typed.
    pub start: Location,
    /// End location as typed.
    pub end: Location,
    /// Distance, keeping the token as typed.
    pub distance: Distance,
}

/// Arguments for the getdistance command.
#[derive(Debug, Clone)]
pub struct GetDistanceArgs {
    /// Start location as typed.
    pub start: Location,
    /// End location as typed.
    pub end: Location,
}

/// Why a line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The line was empty or whitespace only.
    Blank,
    /// The first word is not a known keyword.
    UnknownCommand(String),
    /// Too few arguments followed the keyword.
    MissingArguments {
        /// Keyword of the command.
        command: &'static str,
        /// Number of arguments the command requires.
        expected: usize,
        /// Number of arguments given.
        found: usize,
    },
    /// The distance was not a positive whole number.
    InvalidDistance(String),
    /// A location name was empty.
    EmptyEndpoint,
}

/// Parsed command with arguments.
#[derive(Debug, Clone)]
pub enum Command {
    /// Store a route.
    AddRoute(AddRouteArgs),
    /// Look up a route.
    GetDistance(GetDistanceArgs),
    /// End the session.
    Exit,
    /// A line that is not a valid command.
    Invalid {
        /// The line echoed back to the user.
        line: String,
        /// What was wrong with it.
        reason: InvalidReason,
    },
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse an input line into a Command.
    pub fn parse(input: &str) -> Command {
        let Some((keyword, args)) = split_keyword(input) else {
            return Command::Invalid {
                line: String::new(),
                reason: InvalidReason::Blank,
            };
        };

        let Some(def) = find_command(keyword) else {
            return Self::invalid(input, InvalidReason::UnknownCommand(keyword.to_string()));
        };

        if args.len() < def.arity {
            return Self::invalid(input, Self::missing_arguments(def, args.len()));
        }

        match def.kind {
            CommandKind::AddRoute => Self::parse_add_route(input, &args),
            CommandKind::GetDistance => Self::parse_get_distance(input, &args),
            CommandKind::Exit => Command::Exit,
        }
    }

    /// Parse addroute arguments. Arity has already been checked.
    fn parse_add_route(input: &str, args: &[&str]) -> Command {
        let Some((start, end)) = Self::locations(args[0], args[1]) else {
            return Self::invalid(input, InvalidReason::EmptyEndpoint);
        };

        let Some(distance) = Distance::parse(args[2]) else {
            return Self::invalid(input, InvalidReason::InvalidDistance(args[2].to_string()));
        };

        Command::AddRoute(AddRouteArgs {
            start,
            end,
            distance,
        })
    }

    /// Parse getdistance arguments. Arity has already been checked.
    fn parse_get_distance(input: &str, args: &[&str]) -> Command {
        match Self::locations(args[0], args[1]) {
            Some((start, end)) => Command::GetDistance(GetDistanceArgs { start, end }),
            None => Self::invalid(input, InvalidReason::EmptyEndpoint),
        }
    }

    fn locations(start: &str, end: &str) -> Option<(Location, Location)> {
        Some((Location::new(start).ok()?, Location::new(end).ok()?))
    }

    fn missing_arguments(def: &CommandDef, found: usize) -> InvalidReason {
        InvalidReason::MissingArguments {
            command: def.name,
            expected: def.arity,
            found,
        }
    }

    fn invalid(input: &str, reason: InvalidReason) -> Command {
        Command::Invalid {
            line: input.to_string(),
            reason,
        }
    }
}
