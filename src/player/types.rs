use super::models::GameModel;

/// Fields accepted when recording a game for a player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGame {
    pub opponent: String,
    pub date: Option<String>,
    pub score: Option<String>,
    pub result: String,
    pub ball_color: Option<String>,
    pub location: Option<String>,
    pub weather: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

impl NewGame {
    /// Builds the stored game, using `today` when no date (or an empty one) was given
    pub fn into_game(self, today: impl FnOnce() -> String) -> GameModel {
        let date = self
            .date
            .filter(|date| !date.is_empty())
            .unwrap_or_else(today);

        GameModel {
            date,
            opponent: self.opponent,
            score: self.score,
            result: self.result,
            ball_color: self.ball_color,
            location: self.location,
            weather: self.weather,
            duration: self.duration,
            notes: self.notes,
        }
    }
}
