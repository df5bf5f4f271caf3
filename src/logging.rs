//! Tracing setup for the `qpy-common` binary

use std::fs;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Build the filter: `RUST_LOG` wins over the configured level.
fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// Logs go to stderr unless `config.file` is set. The returned guard flushes
/// the file writer on drop and must be held until the program exits.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let Some(path) = &config.file else {
        let builder = builder.with_writer(std::io::stderr);
        let result = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = builder.with_writer(writer).with_ansi(false);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(Some(guard))
}
