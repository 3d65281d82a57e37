use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing for the bot process. RUST_LOG overrides the default
/// filter. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,holdem_bot=debug"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
