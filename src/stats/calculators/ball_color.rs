use crate::player::{
    models::{GREEN_BALL, RED_BALL},
    GameModel,
};

use super::super::{PlayerStats, StatCalculator};
use super::win_rate;

/// Win rate split by the ball color the player used.
///
/// Games with any other color, or none, are ignored by both splits.
pub struct BallColorCalculator;

impl StatCalculator for BallColorCalculator {
    fn calculate(&self, games: &[GameModel], stats: &mut PlayerStats) {
        stats.red_ball_win_rate = win_rate(games.iter().filter(|g| g.played_with(RED_BALL)));
        stats.green_ball_win_rate = win_rate(games.iter().filter(|g| g.played_with(GREEN_BALL)));
    }
}
