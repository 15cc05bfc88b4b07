use menu_core::LogConfig;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Install the global subscriber. RUST_LOG wins over the configured level.
pub(crate) fn init_logging(config: &LogConfig) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(create_env_filter(config))
        .with(fmt_layer)
        .try_init()
        .ok();
}

fn create_env_filter(config: &LogConfig) -> EnvFilter {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| config.filter_level.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!(
            "Failed to parse filter directive: {}. Falling back to default: info",
            directive
        );
        EnvFilter::new("info")
    })
}
