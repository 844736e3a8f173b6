//! Command output types.
//!
//! A handler either produces a line of text for the user or asks the
//! session loop to stop. The loop, not the handler, decides what happens
//! next.

/// Output from a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Response line to show the user.
    Message(String),

    /// Session control action.
    Control(ControlAction),
}

/// Control actions that affect the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// End the session.
    Exit,
}

impl CommandOutput {
    /// Creates a response message.
    pub fn message(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }

    /// Creates an exit control action.
    pub fn exit() -> Self {
        Self::Control(ControlAction::Exit)
    }

    /// Returns the response text, if this output is a message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(msg) => Some(msg),
            Self::Control(_) => None,
        }
    }

    /// Returns true if this output ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Control(ControlAction::Exit))
    }
}
