use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr.
///
/// `RUST_LOG` wins when set; otherwise `debug` turns on debug-level output
/// and everything else stays at `warn`.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
