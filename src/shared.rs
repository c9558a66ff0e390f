use std::sync::Arc;
use thiserror::Error;

use crate::graphql::{build_schema, BocceSchema};
use crate::player::{PlayerRepository, PlayerService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub schema: BocceSchema,
}

impl AppState {
    pub fn new(player_repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        let player_service = Arc::new(PlayerService::new(player_repository));
        Self {
            schema: build_schema(player_service),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
