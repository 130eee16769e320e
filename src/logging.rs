//! Tracing setup for the dashboard.
//!
//! Events go to stdout and to one log file per launch under
//! `<config>/.tunedash/logs`. Each fine-tuning run gets a `run` span carrying
//! its id, so checkpoint and completion events can be correlated and the file
//! records how long every run took.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing::Span;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Registry, fmt, fmt::format::FmtSpan, prelude::*};

use crate::app_dirs;

/// Filter used when `RUST_LOG` is unset: our own events at info, dependencies
/// (eframe, winit, wgpu) only when they warn.
pub const DEFAULT_DIRECTIVES: &str = "warn,tunedash=info";
const KEPT_LAUNCH_LOGS: usize = 10;
const LOG_NAME_PREFIX: &str = "tunedash";

static FILE_WRITER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Log directory unavailable: {0}")]
    Directory(#[from] app_dirs::AppDirError),
    #[error("Failed to open launch log {path}: {source}")]
    OpenLog {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to clean up old logs in {path}: {source}")]
    Prune {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to name launch log: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the stdout and launch-file subscriber. Later calls do nothing.
///
/// Errors are returned so `main` can keep going without logs.
pub fn init() -> Result<(), LoggingError> {
    if FILE_WRITER_GUARD.get().is_some() {
        return Ok(());
    }
    let dir = app_dirs::logs_dir()?;
    let (path, writer, guard) = open_launch_log(&dir, launch_time())?;
    let pruned = retain_newest_logs(&dir, KEPT_LAUNCH_LOGS);

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let console = fmt::layer()
        .with_target(false)
        .with_timer(local_timer(offset))
        .with_writer(std::io::stdout);
    let launch_file = fmt::layer()
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(local_timer(offset))
        .with_writer(writer);
    tracing::subscriber::set_global_default(
        Registry::default()
            .with(env_filter())
            .with(console)
            .with(launch_file),
    )?;
    let _ = FILE_WRITER_GUARD.set(guard);
    tracing::info!(log = %path.display(), "Dashboard logging ready");
    if let Err(err) = pruned {
        tracing::warn!("{err}");
    }
    Ok(())
}

/// Span wrapping every event of one fine-tuning run.
pub fn run_span(run_id: &str) -> Span {
    tracing::info_span!("run", id = %run_id)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn launch_time() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn local_timer(
    offset: UtcOffset,
) -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const CLOCK: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
    fmt::time::OffsetTime::new(offset, CLOCK.into())
}

fn launch_log_name(started: OffsetDateTime) -> Result<String, LoggingError> {
    const STAMP: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_NAME_PREFIX}_{}.log", started.format(STAMP)?))
}

/// Create this launch's log file and a non-blocking writer into it.
fn open_launch_log(
    dir: &Path,
    started: OffsetDateTime,
) -> Result<(PathBuf, NonBlocking, WorkerGuard), LoggingError> {
    let path = dir.join(launch_log_name(started)?);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenLog {
            path: path.clone(),
            source,
        })?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    Ok((path, writer, guard))
}

/// Delete all but the `keep` most recently modified dashboard logs.
fn retain_newest_logs(dir: &Path, keep: usize) -> Result<(), LoggingError> {
    let prune_err = |source| LoggingError::Prune {
        path: dir.to_path_buf(),
        source,
    };
    let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(prune_err)?.flatten() {
        let path = entry.path();
        if !is_launch_log(&path) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        logs.push((modified, path));
    }
    logs.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in logs.into_iter().skip(keep) {
        fs::remove_file(&path).map_err(prune_err)?;
    }
    Ok(())
}

fn is_launch_log(path: &Path) -> bool {
    path.is_file()
        && path.extension().is_some_and(|ext| ext == "log")
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_NAME_PREFIX))
}
