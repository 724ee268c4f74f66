use otp_core::control::associations::{DEFAULT_ORDER_BY_SCORE, DEFAULT_PAGE_SIZE};
use otp_core::control::{AssociationsRequest, DatasourceSetting, Page};
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

/// Pagination parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageParams {
    /// Page index (zero-based).
    #[serde(default)]
    pub index: i64,
    /// Number of results per page.
    #[serde(default = "default_page_size")]
    pub size: i64,
}

const fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Weighting override for one datasource.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DatasourceSettingParams {
    /// Datasource id (e.g., chembl).
    pub id: String,
    /// Weight applied to the datasource score.
    pub weight: f64,
    /// Propagate evidence up the ontology.
    pub propagate: bool,
    /// Only keep associations with evidence from this datasource.
    #[serde(default)]
    pub required: bool,
}

/// Parameters for listing diseases associated with a target.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetDiseaseAssociationsParams {
    /// Ensembl gene ID (e.g., ENSG00000157764).
    pub target_id: String,
    /// Pagination parameters.
    pub page: PageParams,
    /// Order results by datasource or score - score is default.
    #[serde(default = "default_order_by_score")]
    pub order_by_score: String,
    /// Filter by list of disease IDs.
    #[serde(rename = "Bs", default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<Vec<String>>,
    /// List of datasource settings.
    #[serde(default)]
    pub datasources: Option<Vec<DatasourceSettingParams>>,
    /// Utilize target interactions to retrieve all associated diseases.
    #[serde(default)]
    pub enable_indirect: bool,
    /// Attach disease descriptions and therapeutic areas to each association.
    #[serde(default)]
    pub include_disease_details: bool,
    /// List of facet IDs to filter by (using AND).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_filters: Option<Vec<String>>,
    /// Filter to apply to the IDs with string prefixes.
    #[serde(rename = "BFilter", default)]
    pub b_filter: String,
}

fn default_order_by_score() -> String {
    DEFAULT_ORDER_BY_SCORE.to_string()
}

impl From<TargetDiseaseAssociationsParams> for AssociationsRequest {
    fn from(params: TargetDiseaseAssociationsParams) -> Self {
        Self {
            target_id: params.target_id,
            page: Page {
                index: params.page.index,
                size: params.page.size,
            },
            order_by_score: params.order_by_score,
            disease_ids: params.bs,
            datasources: params.datasources.map(|settings| {
                settings
                    .into_iter()
                    .map(|setting| DatasourceSetting {
                        id: setting.id,
                        weight: setting.weight,
                        propagate: setting.propagate,
                        required: setting.required,
                    })
                    .collect()
            }),
            enable_indirect: params.enable_indirect,
            facet_filters: params.facet_filters,
            id_prefix_filter: params.b_filter,
            include_disease_details: params.include_disease_details,
        }
    }
}

#[tool_router(router = tool_router_associations, vis = "pub")]
impl OtpMcp {
    #[tool(description = "List diseases associated with a target, with overall and per-datasource scores.")]
    async fn target_disease_associations(
        &self,
        Parameters(params): Parameters<TargetDiseaseAssociationsParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self
            .control()
            .target_disease_associations(params.into())
            .await
            .map_err(helpers::map_err)?;
        helpers::json_result(&report)
    }
}
