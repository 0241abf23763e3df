use tracing_subscriber::EnvFilter;

/// Routes `tracing` events to the test harness's captured output.
///
/// Safe to call from every test; only the first call installs a subscriber.
/// Set `RUST_LOG` to change the level (defaults to `nsc_variability=debug`).
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nsc_variability=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();
}
