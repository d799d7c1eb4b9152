//! Custom field tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, tool_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCustomFieldsParams {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetCardCustomFieldParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
    #[schemars(description = "Custom field ID (see get_custom_fields)")]
    pub field_id: String,
    #[schemars(
        description = "Field value object, keyed by type: {\"number\": \"5\"}, {\"text\": \"abc\"}, {\"checked\": \"true\"}, {\"date\": \"2025-12-31T12:00:00.000Z\"}. Pass {} to clear."
    )]
    pub value: Map<String, Value>,
}

#[tool_router(router = custom_field_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "List the custom field definitions of a board.")]
    pub async fn get_custom_fields(
        &self,
        params: Parameters<GetCustomFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().get_custom_fields(&params.0.board_id).await)
    }

    #[tool(description = "Set the value of a custom field on a card.")]
    pub async fn set_card_custom_field(
        &self,
        params: Parameters<SetCardCustomFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let SetCardCustomFieldParams {
            card_id,
            field_id,
            value,
        } = params.0;
        require_id("card_id", &card_id).map_err(invalid_params)?;
        require_id("field_id", &field_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .set_card_custom_field(&card_id, &field_id, &Value::Object(value))
                .await,
        )
    }
}
