//! Route Store - an interactive store for distances between named locations.
//!
//! This library exposes the core modules for the binary and for integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod store;
