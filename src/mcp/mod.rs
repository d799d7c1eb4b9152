//! Model Context Protocol (MCP) server implementation
//!
//! The server can run over stdio or the Streamable HTTP transport.
//!
//! - **server**: [`TrelloServer`], the `ServerHandler` with the combined tool router
//! - **tools**: tool handlers grouped per entity (boards, lists, cards,
//!   checklists, labels, custom fields)
//! - **resources**: the embedded Trello API documentation catalog
//! - **service**: Streamable HTTP service factory

pub mod resources;
pub mod server;
mod service;
pub mod tools;


pub use server::TrelloServer;
pub use service::create_mcp_service;
