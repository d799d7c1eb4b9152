//! List tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, require_non_blank, tool_result};
use crate::trello::TrelloError;
use crate::trello::params::ListUpdate;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListListsParams {
    #[schemars(description = "Board ID to list lists from")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Board ID the list belongs to")]
    pub board_id: String,
    #[schemars(description = "List name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateListParams {
    #[schemars(description = "List ID to update")]
    pub list_id: String,
    #[schemars(description = "New list name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "Archive (true) or unarchive (false) the list (optional)")]
    pub closed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveListParams {
    #[schemars(description = "List ID to archive")]
    pub list_id: String,
}

#[tool_router(router = list_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "List all lists in a Trello board.")]
    pub async fn list_lists(
        &self,
        params: Parameters<ListListsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().list_lists(&params.0.board_id).await)
    }

    #[tool(description = "Create a new list on a board.")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        require_non_blank("name", &params.0.name).map_err(invalid_params)?;
        tool_result(
            self.client()
                .create_list(&params.0.board_id, &params.0.name)
                .await,
        )
    }

    #[tool(
        description = "Rename a list and/or change its archived state. Only the fields you pass are changed."
    )]
    pub async fn update_list(
        &self,
        params: Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateListParams {
            list_id,
            name,
            closed,
        } = params.0;
        require_id("list_id", &list_id).map_err(invalid_params)?;

        let update = ListUpdate { name, closed };
        if update.is_empty() {
            return Err(invalid_params(TrelloError::validation(
                "update_list needs at least one of name or closed",
            )));
        }

        tool_result(self.client().update_list(&list_id, &update).await)
    }

    #[tool(description = "Archive (close) a list.")]
    pub async fn archive_list(
        &self,
        params: Parameters<ArchiveListParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("list_id", &params.0.list_id).map_err(invalid_params)?;
        tool_result(self.client().archive_list(&params.0.list_id).await)
    }
}
