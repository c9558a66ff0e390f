use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::{GameModel, PlayerModel},
    repository::PlayerRepository,
    types::NewGame,
};
use crate::shared::AppError;

/// Service for player and game bookkeeping
///
/// Identifiers arrive as raw strings from the gateway. An identifier that
/// does not parse as an integer behaves exactly like one that matches no
/// player.
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.repository.list_players().await?;
        debug!(player_count = players.len(), "Players retrieved");
        Ok(players)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<PlayerModel>, AppError> {
        let Some(id) = parse_player_id(id) else {
            debug!("Unparseable player id, treating as not found");
            return Ok(None);
        };
        self.repository.get_player(id).await
    }

    /// Creates a player whose id is the current player count plus one.
    ///
    /// Ids are not reserved: after a delete, or with concurrent creates, the
    /// same id can be handed out twice.
    #[instrument(skip(self))]
    pub async fn create(&self, name: String) -> Result<PlayerModel, AppError> {
        let id = self.repository.count_players().await? as i64 + 1;
        let player = PlayerModel::new(id, name);

        self.repository.insert_player(&player).await?;

        info!(player_id = player.id, name = %player.name, "Player created");
        Ok(player)
    }

    /// Returns true when exactly one player document was removed
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(id) = parse_player_id(id) else {
            return Ok(false);
        };

        let deleted = self.repository.delete_player(id).await? == 1;
        info!(player_id = id, deleted, "Player delete processed");
        Ok(deleted)
    }

    /// Appends a game to the player's list, defaulting the date to today.
    ///
    /// The built game is returned even when no player was modified.
    #[instrument(skip(self, new_game))]
    pub async fn append_game(
        &self,
        player_id: &str,
        new_game: NewGame,
    ) -> Result<(bool, GameModel), AppError> {
        let game = new_game.into_game(today);

        let Some(player_id) = parse_player_id(player_id) else {
            return Ok((false, game));
        };

        let modified = self.repository.push_game(player_id, &game).await? > 0;
        info!(
            player_id,
            opponent = %game.opponent,
            date = %game.date,
            modified,
            "Game append processed"
        );
        Ok((modified, game))
    }

    /// Removes every game of the player played on `date` against `opponent`
    #[instrument(skip(self))]
    pub async fn remove_game(
        &self,
        player_id: &str,
        date: &str,
        opponent: &str,
    ) -> Result<bool, AppError> {
        let Some(player_id) = parse_player_id(player_id) else {
            return Ok(false);
        };

        let modified = self
            .repository
            .pull_games(player_id, date, opponent)
            .await?
            > 0;
        info!(player_id, modified, "Game removal processed");
        Ok(modified)
    }
}

fn parse_player_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Current local date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
