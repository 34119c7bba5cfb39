//! Tracing setup for the binary
//!
//! Ledger operations emit `tracing` events; the subscriber is only installed
//! by the CLI entry point so library consumers can bring their own.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set and stays quiet (warnings only) otherwise.
/// Events go to stderr so command output on stdout stays clean.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("student_finance=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
