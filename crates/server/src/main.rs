//! carelist server - HTTP REST API for the healthcare professional directory
//!
//! Loads `.env`, reads configuration, loads the dataset and serves until
//! shut down.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside development
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
