use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

mod config;
mod creators;
mod handlers;
mod llm;
mod utils;

use config::CONFIG;
use creators::{ArtifactCreator, PORTRAIT, SCULPTURE};
use handlers::router;
use llm::CompletionClient;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _logging_guards = init_logging();

    info!("Starting art prompt service");
    info!("Using completion model: {}", CONFIG.openrouter_model);

    let client = CompletionClient::from_config();
    let portrait = ArtifactCreator::new(client.clone(), &PORTRAIT);
    let sculpture = ArtifactCreator::new(client, &SCULPTURE);

    let app = router(portrait, sculpture);
    let listener = tokio::net::TcpListener::bind(&CONFIG.bind_addr).await?;
    info!("Listening on {}", CONFIG.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Art prompt service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
    }
}
