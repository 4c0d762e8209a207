pub mod domain;

pub use domain::{
    matches_guess, ActivityKind, ChallengeKind, Countdown, CountdownTick, Difficulty,
    GeneratedContent, GenerationParams, Leaderboard, ParamError, RevealError, RevealState,
    ScoreEntry, DEFAULT_QUESTION_COUNT, FITNESS_CHALLENGE_SECS, FITNESS_EXERCISES,
    MAX_QUESTION_COUNT, MIN_QUESTION_COUNT, SECS_PER_RAPID_FIRE_QUESTION,
};
