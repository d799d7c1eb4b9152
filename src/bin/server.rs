use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    trello_mcp::cli::run().await?;
    Ok(())
}
