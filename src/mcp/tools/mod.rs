//! MCP tool implementations
//!
//! Tools are grouped by entity type, one `#[tool_router]` impl block per
//! module, all on [`TrelloServer`](crate::mcp::TrelloServer). The server
//! combines the routers at construction.

pub mod boards;
pub mod cards;
pub mod checklists;
pub mod custom_fields;
pub mod labels;
pub mod lists;

#[cfg(test)]
mod boards_test;
#[cfg(test)]
mod labels_test;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::trello::{TrelloError, TrelloResult};

/// Reject blank identifiers and names before any request goes out.
pub(crate) fn require_non_blank(field: &str, value: &str) -> TrelloResult<()> {
    if value.trim().is_empty() {
        return Err(TrelloError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Trello ids and short links are plain alphanumerics. Anything else would
/// change the request path once spliced into the URL.
pub(crate) fn require_id(field: &str, value: &str) -> TrelloResult<()> {
    require_non_blank(field, value)?;
    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TrelloError::validation(format!(
            "{} must be a Trello id (letters and digits only), got '{}'",
            field, value
        )));
    }
    Ok(())
}

/// Map a local validation failure to an MCP invalid-params error.
pub(crate) fn invalid_params(err: TrelloError) -> McpError {
    McpError::invalid_params(err.to_string(), Some(json!({ "kind": err.kind() })))
}

/// Turn a gateway result into a tool result.
///
/// Arguments are validated before the gateway is called, so every failure
/// here is on the Trello side and becomes an `is_error` tool result carrying
/// the message and, when known, the HTTP status. A validation failure at
/// this point means the response itself did not decode.
pub(crate) fn tool_result<T: Serialize>(result: TrelloResult<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let content = serde_json::to_string_pretty(&value).map_err(|e| {
                McpError::internal_error(
                    "serialization_error",
                    Some(json!({"error": e.to_string()})),
                )
            })?;
            Ok(CallToolResult::success(vec![Content::text(content)]))
        }
        Err(err) => {
            let kind = match &err {
                TrelloError::Validation { .. } => "invalid_response",
                _ => err.kind(),
            };
            warn!(kind, status = ?err.status(), "Trello call failed: {}", err);
            let mut payload = json!({
                "error": err.to_string(),
                "kind": kind,
            });
            if let Some(status) = err.status() {
                payload["status"] = json!(status);
            }
            Ok(CallToolResult::error(vec![Content::text(
                payload.to_string(),
            )]))
        }
    }
}
