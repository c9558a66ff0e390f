use async_graphql::{Object, SimpleObject, ID};

use crate::{
    player::{GameModel, PlayerModel},
    stats::{derive_stats, PlayerStats},
};

/// Player as exposed on the graph; `stats` is derived on every read
pub struct Player(PlayerModel);

impl From<PlayerModel> for Player {
    fn from(model: PlayerModel) -> Self {
        Self(model)
    }
}

#[Object]
impl Player {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn games(&self) -> Vec<Game> {
        self.0.games.iter().cloned().map(Game::from).collect()
    }

    async fn stats(&self) -> PlayerStats {
        derive_stats(&self.0.games)
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Game {
    pub date: String,
    pub opponent: String,
    pub score: String,
    pub result: String,
    pub ball_color: Option<String>,
    pub location: Option<String>,
    pub weather: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Self {
            date: model.date,
            opponent: model.opponent,
            score: model.score.unwrap_or_default(),
            result: model.result,
            ball_color: model.ball_color,
            location: model.location,
            weather: model.weather,
            duration: model.duration,
            notes: model.notes,
        }
    }
}

#[derive(SimpleObject)]
pub struct AddPlayerResult {
    pub player: Option<Player>,
}

#[derive(SimpleObject)]
pub struct DeleteResult {
    pub success: bool,
}

#[derive(SimpleObject)]
pub struct AddGameResult {
    pub success: bool,
    pub game: Option<Game>,
}
