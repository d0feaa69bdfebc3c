use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber that writes to stderr, filtered by
/// `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or empty, and only the first call
/// has any effect.
///
/// # Example
/// ```text
/// RUST_LOG=turtle_logo=trace turtle-logo -f demos/square.logo
/// ```
pub fn init_tracing() {
    INIT.call_once(|| {
            if std::env::var_os("RUST_LOG").is_none_or(|value| value.is_empty()) {
                return;
            }
            let _ = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                    .with_target(true))
                                                  .with(EnvFilter::from_default_env())
                                                  .try_init();
        });
}
