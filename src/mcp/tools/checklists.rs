//! Checklist and check item tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, require_non_blank, tool_result};
use crate::trello::params::CheckItemUpdate;
use crate::trello::{CheckItemState, TrelloError};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetChecklistsParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChecklistParams {
    #[schemars(description = "Card ID the checklist is added to")]
    pub card_id: String,
    #[schemars(description = "Checklist name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistParams {
    #[schemars(description = "Checklist ID to delete")]
    pub checklist_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCheckItemParams {
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Check item text")]
    pub name: String,
    #[schemars(description = "Create the item already checked (optional, default false)")]
    #[serde(default)]
    pub checked: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCheckItemParams {
    #[schemars(description = "Card ID the checklist is on")]
    pub card_id: String,
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Check item ID")]
    pub check_item_id: String,
    #[schemars(description = "'complete' or 'incomplete' (optional)")]
    pub state: Option<String>,
    #[schemars(description = "New item text (optional)")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCheckItemParams {
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Check item ID to delete")]
    pub check_item_id: String,
}

#[tool_router(router = checklist_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "Get all checklists on a card, with their check items.")]
    pub async fn get_checklists(
        &self,
        params: Parameters<GetChecklistsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        tool_result(self.client().get_checklists(&params.0.card_id).await)
    }

    #[tool(description = "Create a checklist on a card.")]
    pub async fn create_checklist(
        &self,
        params: Parameters<CreateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        require_non_blank("name", &params.0.name).map_err(invalid_params)?;
        tool_result(
            self.client()
                .create_checklist(&params.0.card_id, &params.0.name)
                .await,
        )
    }

    #[tool(description = "Delete a checklist and all of its items.")]
    pub async fn delete_checklist(
        &self,
        params: Parameters<DeleteChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("checklist_id", &params.0.checklist_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .delete_checklist(&params.0.checklist_id)
                .await
                .map(|()| json!({"deleted": true})),
        )
    }

    #[tool(description = "Add an item to a checklist.")]
    pub async fn add_check_item(
        &self,
        params: Parameters<AddCheckItemParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("checklist_id", &params.0.checklist_id).map_err(invalid_params)?;
        require_non_blank("name", &params.0.name).map_err(invalid_params)?;
        tool_result(
            self.client()
                .add_check_item(&params.0.checklist_id, &params.0.name, params.0.checked)
                .await,
        )
    }

    #[tool(
        description = "Check, uncheck or rename a check item. Only the fields you pass are changed."
    )]
    pub async fn update_check_item(
        &self,
        params: Parameters<UpdateCheckItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateCheckItemParams {
            card_id,
            checklist_id,
            check_item_id,
            state,
            name,
        } = params.0;
        require_id("card_id", &card_id).map_err(invalid_params)?;
        require_id("checklist_id", &checklist_id).map_err(invalid_params)?;
        require_id("check_item_id", &check_item_id).map_err(invalid_params)?;

        let state = state
            .map(|s| s.parse::<CheckItemState>())
            .transpose()
            .map_err(|e| invalid_params(TrelloError::validation(e)))?;

        let update = CheckItemUpdate { name, state };
        if update.is_empty() {
            return Err(invalid_params(TrelloError::validation(
                "update_check_item needs at least one of state or name",
            )));
        }

        tool_result(
            self.client()
                .update_check_item(&card_id, &checklist_id, &check_item_id, &update)
                .await,
        )
    }

    #[tool(description = "Delete an item from a checklist.")]
    pub async fn delete_check_item(
        &self,
        params: Parameters<DeleteCheckItemParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("checklist_id", &params.0.checklist_id).map_err(invalid_params)?;
        require_id("check_item_id", &params.0.check_item_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .delete_check_item(&params.0.checklist_id, &params.0.check_item_id)
                .await
                .map(|()| json!({"deleted": true})),
        )
    }
}
