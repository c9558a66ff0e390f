use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Document},
    options::{FindOneOptions, FindOptions},
    Client, Collection,
};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::{GameModel, PlayerModel};
use crate::shared::AppError;

/// Trait for player document store operations
///
/// Counts returned by the write operations mirror the store's own
/// deleted/modified document counts.
#[async_trait]
pub trait PlayerRepository {
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError>;
    async fn get_player(&self, id: i64) -> Result<Option<PlayerModel>, AppError>;
    async fn count_players(&self) -> Result<u64, AppError>;
    async fn insert_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    async fn delete_player(&self, id: i64) -> Result<u64, AppError>;

    /// Appends a game to the end of the player's game list
    async fn push_game(&self, player_id: i64, game: &GameModel) -> Result<u64, AppError>;

    /// Removes every embedded game with exactly this date and opponent
    async fn pull_games(&self, player_id: i64, date: &str, opponent: &str)
        -> Result<u64, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
///
/// Players are kept in insertion order, like documents in a fresh collection.
/// Only the first player with a matching id is touched by writes.
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<PlayerModel>>,
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(Vec::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<PlayerModel>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.read().await;
        debug!(player_count = players.len(), "Listing players from memory");
        Ok(players.clone())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, id: i64) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let player = players.iter().find(|p| p.id == id).cloned();

        match &player {
            Some(p) => debug!(player_id = id, name = %p.name, "Player found in memory"),
            None => debug!(player_id = id, "Player not found in memory"),
        }

        Ok(player)
    }

    async fn count_players(&self) -> Result<u64, AppError> {
        Ok(self.players.read().await.len() as u64)
    }

    #[instrument(skip(self, player))]
    async fn insert_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = player.id, name = %player.name, "Inserting player in memory");
        self.players.write().await.push(player.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, id: i64) -> Result<u64, AppError> {
        let mut players = self.players.write().await;
        match players.iter().position(|p| p.id == id) {
            Some(index) => {
                players.remove(index);
                debug!(player_id = id, "Player deleted from memory");
                Ok(1)
            }
            None => {
                warn!(player_id = id, "Player not found for deletion in memory");
                Ok(0)
            }
        }
    }

    #[instrument(skip(self, game))]
    async fn push_game(&self, player_id: i64, game: &GameModel) -> Result<u64, AppError> {
        let mut players = self.players.write().await;
        match players.iter_mut().find(|p| p.id == player_id) {
            Some(player) => {
                player.games.push(game.clone());
                debug!(player_id, game_count = player.games.len(), "Game appended in memory");
                Ok(1)
            }
            None => {
                warn!(player_id, "Player not found for game append in memory");
                Ok(0)
            }
        }
    }

    #[instrument(skip(self))]
    async fn pull_games(
        &self,
        player_id: i64,
        date: &str,
        opponent: &str,
    ) -> Result<u64, AppError> {
        let mut players = self.players.write().await;
        let Some(player) = players.iter_mut().find(|p| p.id == player_id) else {
            warn!(player_id, "Player not found for game removal in memory");
            return Ok(0);
        };

        let before = player.games.len();
        player.games.retain(|game| !game.matches(date, opponent));
        let removed = before - player.games.len();

        debug!(player_id, removed, "Games pulled in memory");
        Ok(u64::from(removed > 0))
    }
}

/// MongoDB implementation of player repository
pub struct MongoPlayerRepository {
    collection: Collection<PlayerModel>,
}

impl MongoPlayerRepository {
    pub fn new(collection: Collection<PlayerModel>) -> Self {
        Self { collection }
    }

    /// Connects to the server and binds to `database.collection`
    #[instrument(skip(uri))]
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri).await.map_err(|e| {
            warn!(error = %e, "Failed to create MongoDB client");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(database, collection, "MongoDB client created");
        Ok(Self::new(client.database(database).collection(collection)))
    }
}

/// Projection that hides the store-assigned `_id` from every read
fn without_object_id() -> Document {
    doc! { "_id": 0 }
}

fn database_error(operation: &'static str) -> impl Fn(mongodb::error::Error) -> AppError {
    move |e| {
        warn!(error = %e, operation, "MongoDB operation failed");
        AppError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PlayerRepository for MongoPlayerRepository {
    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let options = FindOptions::builder()
            .projection(without_object_id())
            .build();

        let players: Vec<PlayerModel> = self
            .collection
            .find(doc! {}, options)
            .await
            .map_err(database_error("find"))?
            .try_collect()
            .await
            .map_err(database_error("find"))?;

        debug!(player_count = players.len(), "Players listed from database");
        Ok(players)
    }

    #[instrument(skip(self))]
    async fn get_player(&self, id: i64) -> Result<Option<PlayerModel>, AppError> {
        let options = FindOneOptions::builder()
            .projection(without_object_id())
            .build();

        let player = self
            .collection
            .find_one(doc! { "id": id }, options)
            .await
            .map_err(database_error("find_one"))?;

        debug!(player_id = id, found = player.is_some(), "Player fetched from database");
        Ok(player)
    }

    #[instrument(skip(self))]
    async fn count_players(&self) -> Result<u64, AppError> {
        self.collection
            .count_documents(doc! {}, None)
            .await
            .map_err(database_error("count_documents"))
    }

    #[instrument(skip(self, player))]
    async fn insert_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = player.id, name = %player.name, "Inserting player in database");

        self.collection
            .insert_one(player, None)
            .await
            .map_err(database_error("insert_one"))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, id: i64) -> Result<u64, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "id": id }, None)
            .await
            .map_err(database_error("delete_one"))?;

        debug!(player_id = id, deleted = result.deleted_count, "Player delete finished");
        Ok(result.deleted_count)
    }

    #[instrument(skip(self, game))]
    async fn push_game(&self, player_id: i64, game: &GameModel) -> Result<u64, AppError> {
        let game = bson::to_bson(game).map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self
            .collection
            .update_one(
                doc! { "id": player_id },
                doc! { "$push": { "games": game } },
                None,
            )
            .await
            .map_err(database_error("update_one"))?;

        debug!(player_id, modified = result.modified_count, "Game push finished");
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn pull_games(
        &self,
        player_id: i64,
        date: &str,
        opponent: &str,
    ) -> Result<u64, AppError> {
        let result = self
            .collection
            .update_one(
                doc! { "id": player_id },
                doc! { "$pull": { "games": { "date": date, "opponent": opponent } } },
                None,
            )
            .await
            .map_err(database_error("update_one"))?;

        debug!(player_id, modified = result.modified_count, "Game pull finished");
        Ok(result.modified_count)
    }
}
