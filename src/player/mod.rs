// Public API - what other modules can use
pub use models::{GameModel, PlayerModel};
pub use repository::{InMemoryPlayerRepository, MongoPlayerRepository, PlayerRepository};
pub use service::PlayerService;
pub use types::NewGame;

pub mod models;
pub mod repository;
pub mod service;
mod types;
