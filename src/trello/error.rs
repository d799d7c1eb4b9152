//! Trello error types.
//!
//! Every failure raised by the codec or the gateway is one of three kinds:
//! a local validation failure, a remote rejection (non-2xx), or a transport
//! failure. None of them is retried.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum TrelloError {
    #[error("Validation error: {message}")]
    #[diagnostic(code(trello_mcp::trello::validation))]
    Validation { message: String },

    #[error("Trello API error ({status}): {body}")]
    #[diagnostic(
        code(trello_mcp::trello::remote_request),
        help("Check that TRELLO_API_KEY and TRELLO_TOKEN are valid and that the ids exist.")
    )]
    RemoteRequest { status: u16, body: String },

    #[error("Failed to reach the Trello API: {source}")]
    #[diagnostic(
        code(trello_mcp::trello::transport),
        help("Check network connectivity and TRELLO_BASE_URL.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}

impl TrelloError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrelloError::Validation {
            message: message.into(),
        }
    }

    /// Remote HTTP status, when the failure came from the Trello API.
    pub fn status(&self) -> Option<u16> {
        match self {
            TrelloError::RemoteRequest { status, .. } => Some(*status),
            TrelloError::Transport { source } => source.status().map(|s| s.as_u16()),
            TrelloError::Validation { .. } => None,
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TrelloError::Validation { .. } => "validation",
            TrelloError::RemoteRequest { .. } => "remote_request",
            TrelloError::Transport { .. } => "transport",
        }
    }
}

impl From<reqwest::Error> for TrelloError {
    fn from(source: reqwest::Error) -> Self {
        TrelloError::Transport { source }
    }
}

pub type TrelloResult<T> = Result<T, TrelloError>;
