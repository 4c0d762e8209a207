pub mod generation_steps;
pub mod leaderboard_steps;
pub mod reveal_steps;
