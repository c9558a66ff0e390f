// Library crate for the bocce stats server
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod graphql;
pub mod player;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::{AppConfig, StorageBackend};
pub use graphql::{build_schema, BocceSchema};
pub use player::{InMemoryPlayerRepository, MongoPlayerRepository, PlayerRepository, PlayerService};
pub use shared::{AppError, AppState};
pub use stats::{derive_stats, PlayerStats};
