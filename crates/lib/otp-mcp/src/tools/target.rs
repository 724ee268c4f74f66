use otp_core::control::TargetRequest;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{OtpMcp, helpers};

/// Parameters for looking up a single target.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfoParams {
    /// Ensembl gene ID (e.g., ENSG00000157764).
    pub target_id: String,
}

#[tool_router(router = tool_router_target, vis = "pub")]
impl OtpMcp {
    #[tool(description = "Fetch a target's symbol, name, biotype, function descriptions, and classes.")]
    async fn target_info(
        &self,
        Parameters(params): Parameters<TargetInfoParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self
            .control()
            .target_info(TargetRequest::new(params.target_id))
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(&report)
    }
}
