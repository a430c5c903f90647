mod bot;
mod command;
mod config;
mod data;
mod db;
mod error;
mod model;
mod service;
mod startup;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::db::PoolRegistry;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let registry = Arc::new(PoolRegistry::new());

    tracing::info!("Settings database ready, starting bot");

    bot::start::start_bot(&config, db, registry).await
}
