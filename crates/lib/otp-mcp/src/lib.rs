//! MCP server implementation for otp-mcp.
//!
//! This crate wires the request adapters into rmcp tool handlers and exposes
//! the MCP-facing API surface for Open Targets Platform lookups.

mod helpers;
mod tools;
pub mod server;

use std::sync::Arc;

use otp_core::OtpControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

pub use tools::associations::{DatasourceSettingParams, PageParams, TargetDiseaseAssociationsParams};
pub use tools::evidence::DiseaseEvidenceParams;
pub use tools::target::TargetInfoParams;

const SERVER_INSTRUCTIONS: &str = r"otp-mcp provides MCP tools for querying the Open Targets Platform.

Tools:
- `target_disease_associations`: diseases associated with a target (Ensembl gene id, e.g. ENSG00000157764),
  with an overall score and per-datasource scores. Set `includeDiseaseDetails` to add disease
  descriptions and therapeutic areas.
- `disease_evidence`: evidence records linking a target to a disease (EFO id, e.g. EFO_0006335),
  optionally filtered by datasource id (default `gwas_credible_sets`).
- `target_info`: approved symbol, name, biotype, function descriptions, and classes of a target.

Notes:
- Every tool returns pretty-printed JSON with a `summary` and a row list (`associations` or `evidences`).
- `summary` counts report the platform total (`count`) and the rows in this page (`returned`).
- Paging is passed through as `page { index, size }`; no results are cached.
- Use `help` for a command list. `health` returns `ok`.";

/// MCP server wrapper around the request adapters and tool routers.
#[derive(Clone)]
pub struct OtpMcp {
    tool_router: ToolRouter<Self>,
    control: Arc<OtpControlPlane>,
}

impl OtpMcp {
    /// Creates a new server owning the control plane.
    #[must_use]
    pub fn new(control: OtpControlPlane) -> Self {
        Self::with_control(Arc::new(control))
    }

    /// Creates a new server using a shared control plane handle.
    #[must_use]
    pub fn with_control(control: Arc<OtpControlPlane>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_associations()
            + Self::tool_router_evidence()
            + Self::tool_router_target()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) fn control(&self) -> &OtpControlPlane {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl OtpMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for OtpMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
