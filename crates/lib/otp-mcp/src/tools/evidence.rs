use otp_core::control::EvidenceRequest;
use otp_core::control::evidence::{
    DEFAULT_DATASOURCE_ID,
    DEFAULT_DISEASE_ID,
    DEFAULT_SIZE,
    DEFAULT_TARGET_ID,
};
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

/// Parameters for listing evidence between a disease and a target.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseEvidenceParams {
    /// EFO disease ID (e.g., EFO_0006335).
    #[serde(default = "default_disease_id")]
    pub disease_id: String,
    /// Ensembl gene ID (e.g., ENSG00000091157).
    #[serde(default = "default_target_id")]
    pub target_id: String,
    /// Datasource IDs to restrict evidence to (e.g., gwas_credible_sets).
    #[serde(default = "default_datasource_ids")]
    pub datasource_ids: Option<Vec<String>>,
    /// Include evidence propagated from descendant diseases.
    #[serde(default = "default_enable_indirect")]
    pub enable_indirect: bool,
    /// Maximum number of evidence records to return.
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_disease_id() -> String {
    DEFAULT_DISEASE_ID.to_string()
}

fn default_target_id() -> String {
    DEFAULT_TARGET_ID.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_datasource_ids() -> Option<Vec<String>> {
    Some(vec![DEFAULT_DATASOURCE_ID.to_string()])
}

const fn default_enable_indirect() -> bool {
    true
}

const fn default_size() -> i64 {
    DEFAULT_SIZE
}

impl From<DiseaseEvidenceParams> for EvidenceRequest {
    fn from(params: DiseaseEvidenceParams) -> Self {
        Self::new(params.disease_id, params.target_id)
            .with_datasource_ids(params.datasource_ids)
            .with_indirect(params.enable_indirect)
            .with_size(params.size)
    }
}

#[tool_router(router = tool_router_evidence, vis = "pub")]
impl OtpMcp {
    #[tool(description = "List evidence records supporting a target-disease association.")]
    async fn disease_evidence(
        &self,
        Parameters(params): Parameters<DiseaseEvidenceParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self
            .control()
            .disease_evidence(params.into())
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(&report)
    }
}
