//! Command keyword table.
//!
//! Each keyword is listed once with the number of positional arguments it
//! requires. The router checks arity against this table before building a
//! command.

/// Which command a keyword selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Store a route: `<start> <end> <distance>`.
    AddRoute,
    /// Look up a route: `<start> <end>`.
    GetDistance,
    /// Leave the session.
    Exit,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Command keyword, matched without regard to case.
    pub name: &'static str,
    /// The command this keyword selects.
    pub kind: CommandKind,
    /// Number of positional arguments required after the keyword.
    pub arity: usize,
}

/// All command definitions.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "addroute",
        kind: CommandKind::AddRoute,
        arity: 3,
    },
    CommandDef {
        name: "getdistance",
        kind: CommandKind::GetDistance,
        arity: 2,
    },
    CommandDef {
        name: "exit",
        kind: CommandKind::Exit,
        arity: 0,
    },
];

/// Finds a command definition by keyword, ignoring ASCII case.
pub fn find_command(keyword: &str) -> Option<&'static CommandDef> {
    COMMANDS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(keyword))
}
