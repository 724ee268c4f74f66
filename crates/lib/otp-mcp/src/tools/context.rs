use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::OtpMcp;

/// Payload listing the MCP commands this server offers.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server offers.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "target_disease_associations - Diseases associated with a target (targetId, page, \
                 orderByScore, Bs, datasources, enableIndirect, facetFilters, BFilter, \
                 includeDiseaseDetails)."
                    .to_string(),
                "disease_evidence - Evidence linking a target to a disease (diseaseId, targetId, \
                 datasourceIds, enableIndirect, size)."
                    .to_string(),
                "target_info - Identity, biotype, function, and classes of a target (targetId)."
                    .to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl OtpMcp {
    #[tool(description = "List the MCP commands this server offers.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_lookup_tool() {
        let help = HelpCommands::default();
        for tool in ["target_disease_associations", "disease_evidence", "target_info"] {
            assert!(
                help.commands.iter().any(|command| command.starts_with(tool)),
                "{tool} should be listed"
            );
        }
    }
}
