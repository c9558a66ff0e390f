mod ball_color;
mod scoring;
mod streak;
mod win_rate;

pub use ball_color::BallColorCalculator;
pub use scoring::{parse_points, ScoringCalculator};
pub use streak::StreakCalculator;
pub use win_rate::{win_rate, WinRateCalculator};
