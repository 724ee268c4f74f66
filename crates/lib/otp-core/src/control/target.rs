use otp_schema::models::{TargetClass, TargetDetails, TargetReport};
use otp_schema::queries::TARGET_INFO;
use otp_schema::remote::{TargetInfoData, TargetRecord};
use serde::{Deserialize, Serialize};

use super::{AdapterError, ControlError, OtpControlPlane, build_variables, require_non_blank};

pub const TOOL_NAME: &str = "target_info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    pub target_id: String,
}

impl TargetRequest {
    #[must_use]
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

impl OtpControlPlane {
    /// Looks up a target's identity, biotype, function, and classes.
    ///
    /// # Errors
    /// Returns an [`AdapterError`] naming the target when validation, the
    /// remote call, or response parsing fails.
    pub async fn target_info(&self, request: TargetRequest) -> Result<TargetReport, AdapterError> {
        self.fetch_target(&request).await.map_err(|source| {
            AdapterError::logged(TOOL_NAME, format!("target {}", request.target_id), source)
        })
    }

    async fn fetch_target(&self, request: &TargetRequest) -> Result<TargetReport, ControlError> {
        require_non_blank("targetId", &request.target_id)?;
        let variables = build_variables(request)?;
        let data: TargetInfoData = self.fetch(&TARGET_INFO, &variables).await?;
        let target = data.target.ok_or_else(|| {
            ControlError::MissingField(format!("no target returned for {}", request.target_id))
        })?;
        Ok(normalize_target(target))
    }
}

#[must_use]
pub fn normalize_target(target: TargetRecord) -> TargetReport {
    TargetReport {
        target: TargetDetails {
            id: target.id,
            symbol: target.approved_symbol,
            name: target.approved_name,
            biotype: target.biotype,
            function_descriptions: target.function_descriptions,
            target_classes: target
                .target_class
                .into_iter()
                .map(|class| TargetClass {
                    id: class.id,
                    label: class.label,
                })
                .collect(),
        },
    }
}
