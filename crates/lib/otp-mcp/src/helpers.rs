use std::borrow::Cow;

use otp_core::AdapterError;
use rmcp::ErrorData;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use serde::Serialize;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: AdapterError) -> ErrorData {
    let code = if err.is_invalid_input() {
        ErrorCode::INVALID_PARAMS
    } else {
        ErrorCode::INTERNAL_ERROR
    };
    mcp_err(code, err.to_string())
}

/// Renders `value` as the single pretty-printed JSON text block of a tool result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let text = serde_json::to_string_pretty(value).map_err(|err| {
        mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("failed to render tool result: {err}"),
        )
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
