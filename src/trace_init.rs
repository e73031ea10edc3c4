//! Opt-in JSON trace log for hosts that embed the engine through the C ABI.
//!
//! Without the `trace` feature no subscriber is installed and `lipi-core`'s
//! `tracing` events go nowhere.

use std::path::Path;

#[cfg(feature = "trace")]
const LOG_FILE: &str = "lipi-trace.jsonl";
#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "lipi_core=debug,lipi_engine=debug";

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Lives until process exit.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        if installed.is_ok() {
            tracing::debug!(dir = %log_dir.display(), "trace log opened");
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}
