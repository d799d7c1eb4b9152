use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::trello::TrelloError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Trello(#[from] TrelloError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(trello_mcp::cli::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(trello_mcp::cli::transport))]
    Transport { message: String },

    #[error("Unknown document '{slug}'")]
    #[diagnostic(
        code(trello_mcp::cli::unknown_doc),
        help("Run `trello-mcp docs` to list the available documents.")
    )]
    UnknownDoc { slug: String },
}

pub type CliResult<T> = Result<T, CliError>;
