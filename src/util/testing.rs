//! Test logging harness
//!
//! Installs a global tracing subscriber exactly once so test runs can be
//! inspected with `RUST_LOG=formtree=trace cargo test`.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("test setup complete");
    });
}

fn setup_test_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formtree=debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // A subscriber may already be installed by another suite in the same
    // process; keep the first one.
    if subscriber.try_init().is_err() {
        info!("tracing subscriber already set");
    }
}
