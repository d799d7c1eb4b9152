//! MCP Streamable HTTP service creation
//!
//! Builds the service that the `http` transport nests into an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::trello::TrelloClient;

use super::server::TrelloServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own [`TrelloServer`], all sharing one gateway.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use trello_mcp::config::Settings;
/// # use trello_mcp::mcp::create_mcp_service;
/// # use trello_mcp::trello::TrelloClient;
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = TrelloClient::new(&Settings::new("key", "token"))?;
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(client, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: impl Into<Arc<TrelloClient>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TrelloServer, LocalSessionManager> {
    let client = client.into();

    // rmcp expects the factory to fail with io::Error
    let service_factory = move || -> Result<TrelloServer, std::io::Error> {
        Ok(TrelloServer::new(Arc::clone(&client)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
