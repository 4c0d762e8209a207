use super::ActivityKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Validated generation output, one variant per activity kind.
///
/// Field names are camelCase on the wire to match the backend's structured
/// output. A value of this type only exists after schema validation, so all
/// strings are non-empty and all indices in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum GeneratedContent {
    #[serde(rename_all = "camelCase")]
    Riddle {
        riddle: String,
        answer: String,
        is_age_appropriate: bool,
    },

    #[serde(rename_all = "camelCase")]
    IqQuestion {
        question: String,
        answer: String,
        explanation: Option<String>,
    },

    #[serde(rename_all = "camelCase")]
    TruthOrDare { challenge: String },

    #[serde(rename_all = "camelCase")]
    TwoTruthsAndALie {
        /// Exactly three statements, shuffled by the generator
        statements: Vec<String>,
        /// Index of the lie within `statements`
        lie_index: u8,
    },

    #[serde(rename_all = "camelCase")]
    GuessTheName {
        name: String,
        description: String,
        /// Exactly three progressively easier hints
        hints: Vec<String>,
        /// Prompt for an image generator producing the visual clue
        image_prompt: String,
    },

    #[serde(rename_all = "camelCase")]
    RapidFire { questions: Vec<String> },

    #[serde(rename_all = "camelCase")]
    FlirtQuestion { question: String },
}

impl GeneratedContent {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Riddle { .. } => ActivityKind::Riddle,
            Self::IqQuestion { .. } => ActivityKind::IqTest,
            Self::TruthOrDare { .. } => ActivityKind::TruthOrDare,
            Self::TwoTruthsAndALie { .. } => ActivityKind::TwoTruthsAndALie,
            Self::GuessTheName { .. } => ActivityKind::GuessTheName,
            Self::RapidFire { .. } => ActivityKind::RapidFire,
            Self::FlirtQuestion { .. } => ActivityKind::FlirtQuestion,
        }
    }

    /// Riddle-only acceptability flag; true for every other variant
    pub fn is_age_appropriate(&self) -> bool {
        match self {
            Self::Riddle {
                is_age_appropriate, ..
            } => *is_age_appropriate,
            _ => true,
        }
    }
}

/// Compare a player's guess against the canonical answer.
///
/// Trimmed, case-insensitive equality: "Paris " matches "paris",
/// "par is" does not.
pub fn matches_guess(guess: &str, canonical: &str) -> bool {
    guess.trim().to_lowercase() == canonical.trim().to_lowercase()
}
