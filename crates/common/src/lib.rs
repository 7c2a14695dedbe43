pub mod settings;

use tracing_subscriber::EnvFilter;

/// RUST_LOG still wins; the configured level is the fallback.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_level(true)
        .init();
}
