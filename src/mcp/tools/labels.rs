//! Label tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, tool_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardLabelsParams {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Board ID the label belongs to")]
    pub board_id: String,
    #[schemars(description = "Label name")]
    pub name: String,
    #[schemars(
        description = "Label color (optional): green, yellow, orange, red, purple, blue, sky, lime, pink, black. Omit for a colorless label."
    )]
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CardLabelParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
    #[schemars(description = "Label ID")]
    pub label_id: String,
}

#[tool_router(router = label_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "List the labels defined on a board.")]
    pub async fn get_board_labels(
        &self,
        params: Parameters<GetBoardLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().get_board_labels(&params.0.board_id).await)
    }

    #[tool(description = "Create a label on a board.")]
    pub async fn create_label(
        &self,
        params: Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        let color = params
            .0
            .color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        tool_result(
            self.client()
                .create_label(&params.0.board_id, &params.0.name, color)
                .await,
        )
    }

    #[tool(description = "Attach an existing board label to a card.")]
    pub async fn add_label_to_card(
        &self,
        params: Parameters<CardLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        require_id("label_id", &params.0.label_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .add_label_to_card(&params.0.card_id, &params.0.label_id)
                .await
                .map(|()| json!({"added": true})),
        )
    }

    #[tool(description = "Detach a label from a card. The label itself is kept on the board.")]
    pub async fn remove_label_from_card(
        &self,
        params: Parameters<CardLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        require_id("label_id", &params.0.label_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .remove_label_from_card(&params.0.card_id, &params.0.label_id)
                .await
                .map(|()| json!({"removed": true})),
        )
    }
}
