//! Diagnostic tracing set-up
//!
//! Diagnostics go to stderr so stdout only carries the tool's own messages.
//! The filter comes from `YAML_MERGE_LOG`, then `RUST_LOG`, then `warn`.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "YAML_MERGE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from the environment
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling this twice is a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
