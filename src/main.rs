use std::sync::Arc;
use tracing::info;

use swap_rank::config::Config;
use swap_rank::loader::JsonFileSource;
use swap_rank::query::QueryEngine;
use swap_rank::web::server::WebServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swap_rank=info".into()),
        )
        .init();

    info!("swap-rank v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path = std::env::args().nth(1);
    let (config, loaded_from) = Config::resolve(config_path.as_deref())?;
    match loaded_from {
        Some(path) => info!("Config loaded from {}", path),
        None => info!("No config file, using defaults"),
    }

    let config = Arc::new(config);

    // Profiles are re-read on every request
    let source = Arc::new(JsonFileSource::new(&config.data.path));
    info!("Serving profiles from {}", source.path().display());
    let engine = Arc::new(QueryEngine::new(source));

    WebServer::new(engine, config).run().await
}
