//! Board tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, tool_result};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardParams {
    #[schemars(description = "Board ID")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchBoardParams {
    #[schemars(
        description = "Case-insensitive substring of the board name, e.g. 'alpha' matches 'Project Alpha'"
    )]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveBoardParams {
    #[schemars(description = "Board ID to archive (close)")]
    pub board_id: String,
}

#[tool_router(router = board_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "List all boards for the authenticated Trello user.")]
    pub async fn list_boards(&self) -> Result<CallToolResult, McpError> {
        tool_result(self.client().list_boards().await)
    }

    #[tool(description = "Get a single board by ID.")]
    pub async fn get_board(
        &self,
        params: Parameters<GetBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().get_board(&params.0.board_id).await)
    }

    #[tool(
        description = "Find boards by name substring (case-insensitive). Results keep Trello's board order."
    )]
    pub async fn search_board(
        &self,
        params: Parameters<SearchBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        tool_result(self.client().search_boards(&params.0.query).await)
    }

    #[tool(
        description = "Archive (close) a board. Archived boards stay readable and can be reopened in Trello."
    )]
    pub async fn archive_board(
        &self,
        params: Parameters<ArchiveBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().archive_board(&params.0.board_id).await)
    }
}
