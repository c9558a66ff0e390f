use serde::{Deserialize, Serialize};

/// Result value that counts as a win. Anything else is "not a win".
pub const WIN: &str = "win";

pub const RED_BALL: &str = "red";
pub const GREEN_BALL: &str = "green";

/// Document model for a player, stored as one document per player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub games: Vec<GameModel>,
}

impl PlayerModel {
    /// Creates a player with no recorded games
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            games: Vec::new(),
        }
    }
}

/// One recorded match, embedded in the player document.
///
/// Optional fields are left out of the stored document entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModel {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>, // "<ours>-<theirs>"
    #[serde(default)]
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ball_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>, // minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GameModel {
    pub fn is_win(&self) -> bool {
        self.result == WIN
    }

    pub fn played_with(&self, ball_color: &str) -> bool {
        self.ball_color.as_deref() == Some(ball_color)
    }

    /// Score string used for statistics; a game stored without one reads as "0-0"
    pub fn score_or_default(&self) -> &str {
        self.score.as_deref().unwrap_or("0-0")
    }

    /// True when this game is addressed by the given date and opponent pair
    pub fn matches(&self, date: &str, opponent: &str) -> bool {
        self.date == date && self.opponent == opponent
    }
}
