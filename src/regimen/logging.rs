//! Diagnostic logging through `tracing`.
//!
//! Logs go to stderr so they never interleave with the menu on stdout. The level
//! defaults to the one chosen by [`RegimenConfig`]; `RUST_LOG` overrides it.

use crate::config::RegimenConfig;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn build_env_filter(config: &RegimenConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()))
}

/// Install the global subscriber. Calling it twice is harmless; the second call is ignored.
pub fn init_logging(config: &RegimenConfig) {
    let use_ansi = std::io::stderr().is_terminal();
    let result = Registry::default()
        .with(build_env_filter(config))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
