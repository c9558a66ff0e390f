use crate::player::GameModel;

use super::super::{round_to_tenth, PlayerStats, StatCalculator};

/// Parses the player's own points from a `"<ours>-<theirs>"` score.
///
/// Only the first part has to be numeric. Anything that does not split into
/// exactly two parts yields `None`, as do points outside `i32` (the range of
/// a GraphQL `Int`) and digit separators like `1_0`.
pub fn parse_points(score: &str) -> Option<i32> {
    let mut parts = score.split('-');
    let ours = parts.next()?;
    parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    ours.trim().parse().ok()
}

/// Average and highest points over games whose score parses
pub struct ScoringCalculator;

impl StatCalculator for ScoringCalculator {
    fn calculate(&self, games: &[GameModel], stats: &mut PlayerStats) {
        let points: Vec<i32> = games
            .iter()
            .filter_map(|game| parse_points(game.score_or_default()))
            .collect();

        if points.is_empty() {
            stats.average_points = 0.0;
            stats.highest_score = 0;
            return;
        }

        let total: i64 = points.iter().map(|&p| i64::from(p)).sum();
        stats.average_points = round_to_tenth(total as f64 / points.len() as f64);
        stats.highest_score = points.iter().copied().max().unwrap_or_default();
    }
}
