pub mod calculators;
pub mod models;

pub use models::PlayerStats;

use crate::player::GameModel;
use calculators::{BallColorCalculator, ScoringCalculator, StreakCalculator, WinRateCalculator};

/// A single step of stats derivation.
///
/// Each calculator owns a disjoint set of fields in [`PlayerStats`] and only
/// reads the game list, so the order they run in does not matter.
pub trait StatCalculator: Send + Sync {
    fn calculate(&self, games: &[GameModel], stats: &mut PlayerStats);
}

const CALCULATORS: [&dyn StatCalculator; 4] = [
    &WinRateCalculator,
    &BallColorCalculator,
    &ScoringCalculator,
    &StreakCalculator,
];

/// Derives a player's statistics from their games in stored order.
///
/// Never fails; an empty game list gives all-zero stats.
pub fn derive_stats(games: &[GameModel]) -> PlayerStats {
    let mut stats = PlayerStats::default();
    for calculator in CALCULATORS {
        calculator.calculate(games, &mut stats);
    }
    stats
}

/// Rounds to one decimal place.
///
/// Works on the exact binary value rather than `value * 10.0`, which can
/// land on a false tie (0.05 is slightly above 0.05 and must give 0.1).
/// Exact ties go to even.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
