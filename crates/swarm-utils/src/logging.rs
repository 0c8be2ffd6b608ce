//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize tracing subscriber with a custom default filter directive
///
/// The directive is used only when `RUST_LOG` is not set.
pub fn init_tracing_with(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
