//! Command line entry point: `serve` runs the MCP server, `docs` prints the
//! bundled Trello API documentation.

pub mod error;


use std::net::IpAddr;
use std::path::PathBuf;

use axum::Router;
use clap::{Parser, Subcommand, ValueEnum};
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::mcp::{TrelloServer, create_mcp_service, resources};
use crate::trello::TrelloClient;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "trello-mcp")]
#[command(author, version, about = "MCP server for Trello boards, lists and cards", long_about = None)]
pub struct Cli {
    /// Read settings from this dotenv file (default: ./.env if present)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run the MCP server
    Serve {
        /// Transport to speak MCP over
        #[arg(long, value_enum, default_value_t = Transport::Stdio)]
        transport: Transport,
        /// Host address to bind to (http only)
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        /// Port to listen on (http only)
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Print the bundled Trello API documentation
    Docs {
        /// Document to print; omit to list the catalog
        slug: Option<String>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            transport: Transport::Stdio,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP Streamable HTTP at /mcp
    Http,
}

/// Initialize tracing subscriber with env filter
///
/// Logs go to stderr; stdout carries the stdio transport.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trello_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Docs { slug } => {
            println!("{}", docs_output(slug.as_deref())?);
            Ok(())
        }
        Commands::Serve {
            transport,
            host,
            port,
        } => {
            init_tracing();
            let settings = Settings::load(cli.env_file.as_deref())?;
            let client = TrelloClient::new(&settings)?;
            info!(base_url = %client.base_url(), "Trello gateway ready");

            match transport {
                Transport::Stdio => serve_stdio(client).await,
                Transport::Http => serve_http(client, host, port).await,
            }
        }
    }
}

async fn serve_stdio(client: TrelloClient) -> CliResult<()> {
    info!("Serving MCP over stdio");

    let service = TrelloServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| CliError::Transport {
            message: format!("Failed to start MCP server: {e}"),
        })?;

    let reason = service.waiting().await.map_err(|e| CliError::Transport {
        message: format!("MCP server error: {e}"),
    })?;
    info!(?reason, "MCP session closed");
    Ok(())
}

async fn serve_http(client: TrelloClient, host: IpAddr, port: u16) -> CliResult<()> {
    let ct = CancellationToken::new();

    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(client, ct.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("Unable to listen for shutdown signal: {}", err);
            }
            info!("Received shutdown signal, shutting down");
            ct.cancel();
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Render the documentation catalog, or one document by slug.
fn docs_output(slug: Option<&str>) -> CliResult<String> {
    match slug {
        None => Ok(resources::CATALOG
            .iter()
            .map(|entry| format!("{:<20} {:<26} {}", entry.slug, entry.title, entry.uri()))
            .collect::<Vec<_>>()
            .join("\n")),
        Some(slug) => resources::find_slug(slug)
            .and_then(|entry| entry.content())
            .ok_or_else(|| CliError::UnknownDoc {
                slug: slug.to_string(),
            }),
    }
}
