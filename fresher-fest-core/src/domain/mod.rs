pub mod activity;
pub mod content;
pub mod countdown;
pub mod leaderboard;
pub mod reveal;

pub use activity::{
    ActivityKind, ChallengeKind, Difficulty, GenerationParams, ParamError, DEFAULT_QUESTION_COUNT,
    MAX_QUESTION_COUNT, MIN_QUESTION_COUNT,
};
pub use content::{matches_guess, GeneratedContent};
pub use countdown::{Countdown, CountdownTick, FITNESS_CHALLENGE_SECS, SECS_PER_RAPID_FIRE_QUESTION};
pub use leaderboard::{Leaderboard, ScoreEntry, FITNESS_EXERCISES};
pub use reveal::{RevealError, RevealState};
