//! Daemon entry point for the Open Targets Platform MCP server.
//!
//! Loads configuration from `.env`, the environment, and CLI flags, then
//! serves the MCP protocol over stdio.

mod config;
mod logging;

use std::sync::Arc;

use otp_core::{GraphQlClient, OtpControlPlane};
use otp_mcp::server::serve_stdio;
use tracing::info;

use crate::config::OtpConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let config = OtpConfig::from_args()?;
    logging::init(&config);

    info!(
        endpoint = %config.api_url,
        port = %config.port,
        debug = config.debug,
        "starting otp-mcpd"
    );

    let client = GraphQlClient::new(config.api_url.clone())?;
    let control = Arc::new(OtpControlPlane::new(client));
    serve_stdio(control).await
}
