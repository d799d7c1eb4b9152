//! MCP server implementation
//!
//! [`TrelloServer`] owns the shared Trello gateway and the combined tool
//! router. Tools live in [`super::tools`], one router per entity group; the
//! documentation catalog is served from [`super::resources`].

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{
        ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool_handler,
};
use tracing::debug;

use crate::trello::TrelloClient;

use super::resources;

/// MCP server exposing Trello boards, lists, cards, checklists, labels and
/// custom fields as tools, plus the API documentation as resources.
///
/// Cloning is cheap: the gateway is shared behind an `Arc`, so one instance
/// can be handed to every HTTP session.
#[derive(Clone)]
pub struct TrelloServer {
    client: Arc<TrelloClient>,
    tool_router: ToolRouter<Self>,
}

impl TrelloServer {
    pub fn new(client: impl Into<Arc<TrelloClient>>) -> Self {
        Self {
            client: client.into(),
            tool_router: Self::board_tools()
                + Self::list_tools()
                + Self::card_tools()
                + Self::checklist_tools()
                + Self::label_tools()
                + Self::custom_field_tools(),
        }
    }

    pub(crate) fn client(&self) -> &TrelloClient {
        &self.client
    }

    /// Get the combined tool router
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrelloServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Trello MCP Server - Manage boards, lists, cards, checklists, labels and custom fields. \
             Read the trello://docs/ resources for API conventions and limits.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!(uri = %request.uri, "Reading resource");
        resources::read(&request.uri)
    }
}
