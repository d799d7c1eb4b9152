//! Trello REST API access.
//!
//! - `models`: canonical entities (Board, List, Card, Checklist, CheckItem,
//!   Label, CustomField) with wire-name aliases
//! - `codec`: decode/encode between wire JSON and canonical entities
//! - `params`: outbound create/update parameter sets
//! - `client`: the authenticated gateway, one method per remote operation

pub mod client;
pub mod codec;
mod error;
pub mod models;
pub mod params;

#[cfg(test)]
pub(crate) mod mock_server;


pub use client::TrelloClient;
pub use error::{TrelloError, TrelloResult};
pub use models::*;
