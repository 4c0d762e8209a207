use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One discrete game type with its own prompt template and output schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ActivityKind {
    Riddle,
    IqTest,
    TruthOrDare,
    TwoTruthsAndALie,
    GuessTheName,
    RapidFire,
    FlirtQuestion,
}

impl ActivityKind {
    /// Stable type identifier (used for logging and leaderboard keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Riddle => "riddle",
            Self::IqTest => "iq-test",
            Self::TruthOrDare => "truth-or-dare",
            Self::TwoTruthsAndALie => "two-truths-and-a-lie",
            Self::GuessTheName => "guess-the-name",
            Self::RapidFire => "rapid-fire",
            Self::FlirtQuestion => "flirt-question",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Riddle => "Riddles",
            Self::IqTest => "IQ Test",
            Self::TruthOrDare => "Truth or Dare",
            Self::TwoTruthsAndALie => "Two Truths and a Lie",
            Self::GuessTheName => "Guess the Name",
            Self::RapidFire => "Rapid Fire",
            Self::FlirtQuestion => "Flirt Questions",
        }
    }

    pub fn all() -> &'static [ActivityKind] {
        &[
            Self::Riddle,
            Self::IqTest,
            Self::TruthOrDare,
            Self::TwoTruthsAndALie,
            Self::GuessTheName,
            Self::RapidFire,
            Self::FlirtQuestion,
        ]
    }

    pub fn accepts_topic(&self) -> bool {
        matches!(
            self,
            Self::IqTest
                | Self::TwoTruthsAndALie
                | Self::GuessTheName
                | Self::RapidFire
                | Self::FlirtQuestion
        )
    }

    pub fn accepts_difficulty(&self) -> bool {
        matches!(self, Self::IqTest)
    }

    pub fn accepts_count(&self) -> bool {
        matches!(self, Self::RapidFire)
    }

    pub fn requires_challenge(&self) -> bool {
        matches!(self, Self::TruthOrDare)
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty level for IQ test questions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Truth or dare challenge selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeKind {
    Truth,
    Dare,
}

impl ChallengeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truth => "truth",
            Self::Dare => "dare",
        }
    }
}

/// Inclusive bounds for the rapid-fire question count
pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 10;
pub const DEFAULT_QUESTION_COUNT: u8 = 5;

/// User-supplied inputs for a generation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationParams {
    /// Optional topic (e.g. "Scientists", "80s Movies")
    pub topic: Option<String>,

    /// IQ test difficulty
    pub difficulty: Option<Difficulty>,

    /// Number of rapid-fire questions to generate
    pub count: Option<u8>,

    /// Truth or dare selector
    pub challenge: Option<ChallengeKind>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamError {
    #[error("{kind} does not take a topic")]
    UnexpectedTopic { kind: ActivityKind },

    #[error("{kind} does not take a difficulty")]
    UnexpectedDifficulty { kind: ActivityKind },

    #[error("{kind} does not take a question count")]
    UnexpectedCount { kind: ActivityKind },

    #[error("question count {count} outside [{MIN_QUESTION_COUNT},{MAX_QUESTION_COUNT}]")]
    CountOutOfRange { count: u8 },

    #[error("{kind} requires a truth/dare selection")]
    MissingChallenge { kind: ActivityKind },

    #[error("{kind} does not take a truth/dare selection")]
    UnexpectedChallenge { kind: ActivityKind },
}

impl GenerationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        // An all-whitespace topic means the form field was left blank
        if !topic.trim().is_empty() {
            self.topic = Some(topic);
        }
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_challenge(mut self, challenge: ChallengeKind) -> Self {
        self.challenge = Some(challenge);
        self
    }

    /// Check these params against what `kind` declares it accepts.
    ///
    /// Must pass before a prompt is rendered; a violation is a caller bug,
    /// not a runtime condition.
    pub fn check_for(&self, kind: ActivityKind) -> Result<(), ParamError> {
        if self.topic.is_some() && !kind.accepts_topic() {
            return Err(ParamError::UnexpectedTopic { kind });
        }
        if self.difficulty.is_some() && !kind.accepts_difficulty() {
            return Err(ParamError::UnexpectedDifficulty { kind });
        }
        match self.count {
            Some(_) if !kind.accepts_count() => {
                return Err(ParamError::UnexpectedCount { kind });
            }
            Some(count) if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&count) => {
                return Err(ParamError::CountOutOfRange { count });
            }
            _ => {}
        }
        if kind.requires_challenge() {
            if self.challenge.is_none() {
                return Err(ParamError::MissingChallenge { kind });
            }
        } else if self.challenge.is_some() {
            return Err(ParamError::UnexpectedChallenge { kind });
        }
        Ok(())
    }
}
