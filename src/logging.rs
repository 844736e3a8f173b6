//! Logging setup.
//!
//! Standard output carries the command protocol, so logs never go there.
//! Interactive sessions log to a file under the state directory; scripted
//! sessions, and interactive ones whose log file cannot be opened, log to
//! stderr. Both honour `RUST_LOG` and otherwise show warnings and errors.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

const LOG_DIR: &str = "route-store";
const LOG_FILE: &str = "route-store.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to the session log file, falling back to stderr.
pub fn init_file_logging() {
    match open_log_file() {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(e) => {
            init_stderr_logging();
            tracing::warn!(
                "Logging to stderr, could not open {}: {e}",
                get_log_path().display()
            );
        }
    }
}

/// Logs to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Creates the log directory and truncates the log file.
fn open_log_file() -> io::Result<File> {
    let path = get_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Returns the path for the log file.
///
/// `$XDG_STATE_HOME/route-store/route-store.log` on Linux, the config
/// directory elsewhere, and the temp directory as a last resort.
pub fn get_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE))
}
