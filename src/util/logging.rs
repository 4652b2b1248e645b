/// Structured logging setup
///
/// Diagnostics go to stderr through `tracing` so stdout stays clean for
/// result output. Filtering is controlled via `RUST_LOG`; without it the
/// crate logs at info level and everything else stays quiet.
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("unity_launcher_lib=info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    });
}
