pub mod leaderboard;
pub mod rules;
pub mod types;

pub use leaderboard::compute_leaderboard;
pub use rules::evaluate_score;
pub use types::{BetSide, FixtureResult, LeaderboardEntry, Player, Prediction, ScoreArgs, ScorePair};
