use super::SystemConfig;

/// Centralized tracing configuration.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// **Usage:**
/// ```bash
/// RUST_LOG=debug cargo run    # Show every request and reply
/// RUST_LOG=info cargo run     # Show mutations
/// ```
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
