use anyhow::{Context, Result};
use lttrs_infrastructure::LttrsPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str =
    "warn,lttrs=info,lttrs_core=info,lttrs_infrastructure=info,lttrs_application=info";

/// Installs the global subscriber.
///
/// Logs go to a daily file in the logs directory so the game screen stays
/// clean. With `verbose` they are mirrored to stderr. `RUST_LOG` overrides
/// the default filter. The returned guard flushes the file on drop.
pub fn init(verbose: bool) -> Result<WorkerGuard> {
    let logs_dir = LttrsPaths::logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {:?}", logs_dir))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&logs_dir, "lttrs.log"));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(stderr_layer)
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}
