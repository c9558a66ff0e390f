use std::sync::Arc;

use async_graphql::{EmptySubscription, Object, Result, Schema, ID};

use super::types::{AddGameResult, AddPlayerResult, DeleteResult, Player};
use crate::player::{NewGame, PlayerService};

pub type BocceSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the query/mutation graph over the given player service
pub fn build_schema(players: Arc<PlayerService>) -> BocceSchema {
    Schema::build(
        QueryRoot {
            players: players.clone(),
        },
        MutationRoot { players },
        EmptySubscription,
    )
    .finish()
}

pub struct QueryRoot {
    players: Arc<PlayerService>,
}

#[Object]
impl QueryRoot {
    /// Every player with their games and derived stats
    async fn players(&self) -> Result<Vec<Player>> {
        let players = self.players.list().await?;
        Ok(players.into_iter().map(Player::from).collect())
    }

    /// A single player, or null when the id matches nobody
    async fn player(&self, id: ID) -> Result<Option<Player>> {
        Ok(self.players.get(&id).await?.map(Player::from))
    }
}

pub struct MutationRoot {
    players: Arc<PlayerService>,
}

#[Object]
impl MutationRoot {
    async fn add_player(&self, name: String) -> Result<AddPlayerResult> {
        let player = self.players.create(name).await?;
        Ok(AddPlayerResult {
            player: Some(player.into()),
        })
    }

    async fn delete_player(&self, id: ID) -> Result<DeleteResult> {
        let success = self.players.delete(&id).await?;
        Ok(DeleteResult { success })
    }

    /// Records a game; `date` defaults to today's date as YYYY-MM-DD
    #[allow(clippy::too_many_arguments)]
    async fn add_game(
        &self,
        player_id: ID,
        opponent: String,
        date: Option<String>,
        score: String,
        result: String,
        ball_color: Option<String>,
        location: Option<String>,
        weather: Option<String>,
        duration: Option<i32>,
        notes: Option<String>,
    ) -> Result<AddGameResult> {
        let new_game = NewGame {
            opponent,
            date,
            score: Some(score),
            result,
            ball_color,
            location,
            weather,
            duration,
            notes,
        };

        let (success, game) = self.players.append_game(&player_id, new_game).await?;
        Ok(AddGameResult {
            success,
            game: Some(game.into()),
        })
    }

    /// Removes every game of the player matching both date and opponent
    async fn delete_game(
        &self,
        player_id: ID,
        date: String,
        opponent: String,
    ) -> Result<DeleteResult> {
        let success = self
            .players
            .remove_game(&player_id, &date, &opponent)
            .await?;
        Ok(DeleteResult { success })
    }
}
