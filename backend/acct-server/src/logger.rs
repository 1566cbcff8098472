use crate::error::{Result as ServerErrorResult, ServerError};

use acct_config::LoggingConfig;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{LevelFilter, Record, info};

/// Dependency targets capped below the configured level. sqlx logs every
/// statement at info and hyper traces each connection at debug.
const DEPENDENCY_CAPS: &[(&str, LevelFilter)] = &[
    ("sqlx", LevelFilter::Warn),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("tower_http", LevelFilter::Info),
];

/// Effective level for each capped dependency target
pub fn dependency_levels(level: LevelFilter) -> Vec<(&'static str, LevelFilter)> {
    DEPENDENCY_CAPS
        .iter()
        .map(|&(target, cap)| (target, level.min(cap)))
        .collect()
}

/// Resolve the log file under `log_dir`, creating the directory.
/// `None` means log to stdout.
pub fn log_file_path(log_dir: &Path, file: Option<&str>) -> ServerErrorResult<Option<PathBuf>> {
    let Some(file) = file else {
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Logger {
        message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
    })?;

    Ok(Some(log_dir.join(file)))
}

/// Install the global logger. Color applies to stdout only.
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level = logging.level.0;

    let output: Output = match log_file {
        Some(ref path) => std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?
            .into(),
        None => std::io::stdout().into(),
    };

    let colors = (log_file.is_none() && logging.colored).then(level_colors);

    let dispatch = dependency_levels(level)
        .into_iter()
        .fold(Dispatch::new().level(level), |d, (target, lvl)| {
            d.level_for(target, lvl)
        })
        .format(move |out, message, record| match colors {
            Some(colors) => format_line(out, message, record, colors.color(record.level())),
            None => format_line(out, message, record, record.level()),
        })
        .chain(output);

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={}, file={}", level, path.display()),
        None => info!("Logger initialized: level={}, stdout", level),
    }

    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn format_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level} {target}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        target = record.target(),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
