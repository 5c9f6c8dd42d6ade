//! Logging setup.

use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keeps the file writer alive; dropping it flushes buffered lines.
pub type LogGuard = Option<WorkerGuard>;

/// Non-blocking writer appending to `file`, creating its directory.
pub fn log_file_writer(
    file: &Path,
) -> io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let name = file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;

    let appender = tracing_appender::rolling::never(dir, name);
    Ok(tracing_appender::non_blocking(appender))
}

/// Setup logging with the given level.
///
/// `RUST_LOG` overrides `level`. When `file` is set, a second plain-text layer
/// writes there too; keep the returned guard alive for the whole run.
pub fn setup_logging(level: &str, json: bool, file: Option<&Path>) -> io::Result<LogGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match file {
        Some(path) => {
            let (writer, guard) = log_file_writer(path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }

    Ok(guard)
}
