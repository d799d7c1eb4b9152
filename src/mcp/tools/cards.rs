//! Card tools, including comments and due dates.

use chrono::{DateTime, NaiveDate};
use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::server::TrelloServer;
use crate::mcp::tools::{invalid_params, require_id, require_non_blank, tool_result};
use crate::trello::params::{CardUpdate, NewCard};
use crate::trello::{TrelloError, TrelloResult};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCardsParams {
    #[schemars(description = "List ID to list cards from")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardCardsParams {
    #[schemars(description = "Board ID to list cards from")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCardParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(description = "List ID the card is created in")]
    pub list_id: String,
    #[schemars(description = "Card title")]
    pub name: String,
    #[schemars(description = "Card description in markdown (optional, default empty)")]
    #[serde(default)]
    pub desc: Option<String>,
    #[schemars(description = "Due date, ISO 8601 (optional), e.g. '2025-12-31T12:00:00.000Z'")]
    #[serde(default)]
    pub due: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveCardParams {
    #[schemars(description = "Card ID to move")]
    pub card_id: String,
    #[schemars(description = "Destination list ID")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[schemars(description = "Card ID to update")]
    pub card_id: String,
    #[schemars(description = "New title (optional)")]
    pub name: Option<String>,
    #[schemars(
        description = "New description (optional). Pass an empty string to clear it; omit to leave it unchanged."
    )]
    pub desc: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCommentParams {
    #[schemars(description = "Card ID to comment on")]
    pub card_id: String,
    #[schemars(description = "Comment text")]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveCardParams {
    #[schemars(description = "Card ID to archive")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetDueDateParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
    #[schemars(
        description = "Due date, ISO 8601: '2025-12-31T12:00:00.000Z' or a plain date '2025-12-31'"
    )]
    pub due: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MarkDueCompleteParams {
    #[schemars(description = "Card ID")]
    pub card_id: String,
    #[schemars(description = "true marks the due date complete, false reopens it")]
    pub complete: bool,
}

/// Accept RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub(crate) fn validate_due(due: &str) -> TrelloResult<()> {
    let due = due.trim();
    if DateTime::parse_from_rfc3339(due).is_ok() || NaiveDate::parse_from_str(due, "%Y-%m-%d").is_ok()
    {
        return Ok(());
    }
    Err(TrelloError::validation(format!(
        "due '{}' is not an ISO 8601 date or timestamp",
        due
    )))
}

#[tool_router(router = card_tools, vis = "pub(crate)")]
impl TrelloServer {
    #[tool(description = "List all cards in a Trello list.")]
    pub async fn list_cards(
        &self,
        params: Parameters<ListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("list_id", &params.0.list_id).map_err(invalid_params)?;
        tool_result(self.client().list_cards(&params.0.list_id).await)
    }

    #[tool(description = "Get all cards on a Trello board.")]
    pub async fn get_board_cards(
        &self,
        params: Parameters<GetBoardCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("board_id", &params.0.board_id).map_err(invalid_params)?;
        tool_result(self.client().get_board_cards(&params.0.board_id).await)
    }

    #[tool(description = "Get a single card by ID, including its labels and due date.")]
    pub async fn get_card(
        &self,
        params: Parameters<GetCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        tool_result(self.client().get_card(&params.0.card_id).await)
    }

    #[tool(description = "Create a new card in a Trello list.")]
    pub async fn create_card(
        &self,
        params: Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateCardParams {
            list_id,
            name,
            desc,
            due,
        } = params.0;
        require_id("list_id", &list_id).map_err(invalid_params)?;
        require_non_blank("name", &name).map_err(invalid_params)?;
        if let Some(due) = &due {
            validate_due(due).map_err(invalid_params)?;
        }

        let card = NewCard {
            description: desc.filter(|d| !d.is_empty()),
            due,
            ..NewCard::new(list_id, name)
        };
        tool_result(self.client().create_card(&card).await)
    }

    #[tool(description = "Move a card to another list.")]
    pub async fn move_card(
        &self,
        params: Parameters<MoveCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        require_id("list_id", &params.0.list_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .move_card(&params.0.card_id, &params.0.list_id)
                .await,
        )
    }

    #[tool(
        description = "Update a card's title and/or description. Only the fields you pass are changed."
    )]
    pub async fn update_card(
        &self,
        params: Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateCardParams {
            card_id,
            name,
            desc,
        } = params.0;
        require_id("card_id", &card_id).map_err(invalid_params)?;

        let update = CardUpdate {
            name,
            description: desc,
            ..CardUpdate::default()
        };
        if update.is_empty() {
            return Err(invalid_params(TrelloError::validation(
                "update_card needs at least one of name or desc",
            )));
        }

        tool_result(self.client().update_card(&card_id, &update).await)
    }

    #[tool(description = "Add a comment to a Trello card.")]
    pub async fn add_comment(
        &self,
        params: Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        require_non_blank("text", &params.0.text).map_err(invalid_params)?;
        tool_result(
            self.client()
                .add_comment(&params.0.card_id, &params.0.text)
                .await,
        )
    }

    #[tool(description = "Archive (close) a Trello card.")]
    pub async fn archive_card(
        &self,
        params: Parameters<ArchiveCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        tool_result(self.client().archive_card(&params.0.card_id).await)
    }

    #[tool(description = "Set the due date of a card.")]
    pub async fn set_due_date(
        &self,
        params: Parameters<SetDueDateParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        validate_due(&params.0.due).map_err(invalid_params)?;
        tool_result(
            self.client()
                .set_due_date(&params.0.card_id, params.0.due.trim())
                .await,
        )
    }

    #[tool(description = "Mark a card's due date as complete or incomplete.")]
    pub async fn mark_due_complete(
        &self,
        params: Parameters<MarkDueCompleteParams>,
    ) -> Result<CallToolResult, McpError> {
        require_id("card_id", &params.0.card_id).map_err(invalid_params)?;
        tool_result(
            self.client()
                .mark_due_complete(&params.0.card_id, params.0.complete)
                .await,
        )
    }
}
