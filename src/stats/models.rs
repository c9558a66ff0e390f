use async_graphql::SimpleObject;

/// Aggregate statistics derived from a player's games on every read
#[derive(Debug, Clone, Default, PartialEq, SimpleObject)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub win_percentage: f64,
    pub red_ball_win_rate: f64,
    pub green_ball_win_rate: f64,
    pub average_points: f64,
    pub highest_score: i32,
    pub current_streak: u32, // only counted while the latest run is wins
    pub longest_streak: u32,
}
