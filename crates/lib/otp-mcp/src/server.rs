//! MCP server runner for otp-mcp.

use std::sync::Arc;

use otp_core::OtpControlPlane;
use rmcp::serve_server;
use rmcp::transport::io::stdio;
use tracing::info;

use crate::OtpMcp;

/// Serves the MCP server over stdio until the client disconnects.
///
/// # Errors
/// Returns any transport or server error.
pub async fn serve_stdio(
    control: Arc<OtpControlPlane>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let service = OtpMcp::with_control(control);
    let (stdin, stdout) = stdio();
    let running = serve_server(service, (stdin, stdout)).await?;
    info!("otp-mcp serving over stdio");
    let reason = running.waiting().await?;
    info!(?reason, "otp-mcp stdio session ended");
    Ok(())
}
