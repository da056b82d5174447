use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MAZESCAPE_LOG=debug`.
pub const LOG_ENV: &str = "MAZESCAPE_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_PREFIX: &str = "mazescape.log";

/// Installs the global subscriber. Logs go to stderr, or to a daily-rotated file in `log_dir`.
///
/// The returned guard flushes pending log lines when dropped, so keep it alive until exit.
pub fn init(log_dir: Option<&Path>) -> WorkerGuard {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, guard) = match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_dir.is_none())
        .init();
    guard
}
