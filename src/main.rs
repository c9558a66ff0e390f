use std::sync::Arc;

use bocce_stats::{
    build_router, AppConfig, AppError, AppState, InMemoryPlayerRepository, MongoPlayerRepository,
    PlayerRepository, StorageBackend,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bocce_stats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(storage = ?config.storage, "Starting bocce stats server");

    let player_repository: Arc<dyn PlayerRepository + Send + Sync> = match config.storage {
        StorageBackend::Mongo => Arc::new(
            MongoPlayerRepository::connect(
                &config.mongodb_uri,
                &config.mongodb_database,
                &config.mongodb_collection,
            )
            .await?,
        ),
        StorageBackend::Memory => Arc::new(InMemoryPlayerRepository::new()),
    };

    let app = build_router(AppState::new(player_repository));

    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
    info!("Server running on http://{}/graphql", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
