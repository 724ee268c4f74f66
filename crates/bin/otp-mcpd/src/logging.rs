//! Tracing setup. Stdout carries the MCP protocol, so logs go to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::OtpConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the config.
pub fn init(config: &OtpConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
