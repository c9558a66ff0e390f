use crate::player::GameModel;

use super::super::{round_to_tenth, PlayerStats, StatCalculator};

/// Percentage of won games, rounded to one decimal; 0 for no games
pub fn win_rate<'a>(games: impl IntoIterator<Item = &'a GameModel>) -> f64 {
    let (played, won) = games
        .into_iter()
        .fold((0u32, 0u32), |(played, won), game| {
            (played + 1, won + u32::from(game.is_win()))
        });

    if played == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(won) / f64::from(played) * 100.0)
}

/// Fills games played, games won and the overall win percentage
pub struct WinRateCalculator;

impl StatCalculator for WinRateCalculator {
    fn calculate(&self, games: &[GameModel], stats: &mut PlayerStats) {
        stats.games_played = games.len() as u32;
        stats.games_won = games.iter().filter(|game| game.is_win()).count() as u32;
        stats.win_percentage = win_rate(games);
    }
}
