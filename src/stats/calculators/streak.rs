use crate::player::{models::WIN, GameModel};

use super::super::{PlayerStats, StatCalculator};

/// Current and longest win streaks.
///
/// Games are ordered by `date` descending using plain string comparison, so
/// dates that are not zero-padded sort lexically rather than by calendar.
/// Games sharing a date keep their stored order.
///
/// The current streak is the run holding the most recent game, and only when
/// that game is a win. The run left over at the oldest end of the walk is
/// never reported as current, even when it is a win streak.
pub struct StreakCalculator;

impl StatCalculator for StreakCalculator {
    fn calculate(&self, games: &[GameModel], stats: &mut PlayerStats) {
        let mut ordered: Vec<&GameModel> = games.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));

        let mut runs = ordered.chunk_by(|a, b| a.result == b.result);

        stats.current_streak = match runs.next() {
            Some(latest) if latest[0].result == WIN => latest.len() as u32,
            _ => 0,
        };

        stats.longest_streak = ordered
            .chunk_by(|a, b| a.result == b.result)
            .filter(|run| run[0].is_win())
            .map(|run| run.len() as u32)
            .max()
            .unwrap_or_default();
    }
}
