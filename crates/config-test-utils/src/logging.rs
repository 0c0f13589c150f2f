use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a test-friendly tracing subscriber.
///
/// Uses `RUST_LOG` for filtering, defaulting to "info". Output goes through
/// the test writer so it is captured per test. Safe to call from every test;
/// only the first call installs anything.
pub fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();

    let fmt_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .compact();

    // A subscriber may already be installed by an earlier test
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
