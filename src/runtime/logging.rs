use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{self, LogSettings};

/// Send `tracing` output to the log file so it never draws over the TUI.
///
/// Returns the writer guard; dropping it flushes pending lines. Returns
/// `None` when no log file could be set up, in which case events are dropped.
pub fn init(settings: &LogSettings) -> Option<WorkerGuard> {
    let path = settings
        .file
        .as_ref()
        .map(PathBuf::from)
        .or_else(config::default_log_path)?;

    let dir = path.parent()?.to_path_buf();
    let file_name = path.file_name()?.to_owned();
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.filter.as_deref().unwrap_or("info")));

    tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .ok()?;

    Some(guard)
}
