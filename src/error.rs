//! Error types for the route store.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for route store operations.
#[derive(Error, Debug)]
pub enum RouteStoreError {
    /// A route endpoint was empty.
    #[error("Route end points cannot be empty")]
    EmptyEndpoint,

    /// Configuration errors (invalid config file, unreadable path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading commands or writing responses failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteStoreError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyEndpoint => "Input Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using RouteStoreError.
pub type Result<T> = std::result::Result<T, RouteStoreError>;
