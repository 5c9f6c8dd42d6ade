//! Logging setup for the command-line runs.

mod logging;

pub use logging::{log_file_writer, setup_logging, LogGuard};
