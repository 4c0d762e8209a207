use super::content::matches_guess;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Progressive-disclosure state for a single activity screen.
///
/// Forward transitions only, until an explicit reset:
///
/// ```text
/// Idle -> Generating -> Ready -> PartiallyRevealed(1..=total) -> Answered
///   ^                                                               |
///   +----------------------------- reset -------------------------- +
/// ```
///
/// The state is owned by one UI session and never shared; it vanishes when
/// the screen unmounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RevealState {
    /// Nothing generated yet
    #[default]
    Idle,

    /// A generation request is in flight
    Generating,

    /// Content arrived, nothing revealed yet
    Ready { total: u8 },

    /// `revealed` of `total` stages disclosed
    PartiallyRevealed { revealed: u8, total: u8 },

    /// A guess was submitted; terminal until reset
    Answered { correct: bool },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RevealError {
    #[error("generation can only start from idle")]
    NotIdle,

    #[error("no generation in flight")]
    NotGenerating,

    #[error("nothing to reveal in state {state}")]
    NothingToReveal { state: String },

    #[error("all {total} stages already revealed")]
    AllRevealed { total: u8 },

    #[error("cannot answer in state {state}")]
    CannotAnswer { state: String },
}

impl RevealState {
    pub fn new() -> Self {
        Self::Idle
    }

    fn state_name(&self) -> String {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Ready { .. } => "ready",
            Self::PartiallyRevealed { .. } => "partially-revealed",
            Self::Answered { .. } => "answered",
        }
        .to_string()
    }

    /// Idle -> Generating
    pub fn begin_generation(&mut self) -> Result<(), RevealError> {
        if *self != Self::Idle {
            return Err(RevealError::NotIdle);
        }
        *self = Self::Generating;
        Ok(())
    }

    /// Generating -> Ready, with `total` revealable stages
    pub fn content_ready(&mut self, total: u8) -> Result<(), RevealError> {
        if *self != Self::Generating {
            return Err(RevealError::NotGenerating);
        }
        *self = Self::Ready { total };
        Ok(())
    }

    /// Disclose the next stage. The revealed count increases by exactly one.
    pub fn reveal_next(&mut self) -> Result<u8, RevealError> {
        match *self {
            Self::Ready { total } => {
                if total == 0 {
                    return Err(RevealError::AllRevealed { total });
                }
                *self = Self::PartiallyRevealed { revealed: 1, total };
                Ok(1)
            }
            Self::PartiallyRevealed { revealed, total } => {
                if revealed >= total {
                    return Err(RevealError::AllRevealed { total });
                }
                let revealed = revealed + 1;
                *self = Self::PartiallyRevealed { revealed, total };
                Ok(revealed)
            }
            _ => Err(RevealError::NothingToReveal {
                state: self.state_name(),
            }),
        }
    }

    /// Judge a guess against the canonical answer and terminate the round.
    ///
    /// Allowed from Ready or PartiallyRevealed; a guess before content
    /// arrives (or after answering) is a transition error.
    pub fn answer(&mut self, guess: &str, canonical: &str) -> Result<bool, RevealError> {
        match self {
            Self::Ready { .. } | Self::PartiallyRevealed { .. } => {
                let correct = matches_guess(guess, canonical);
                tracing::debug!(correct, "guess judged");
                *self = Self::Answered { correct };
                Ok(correct)
            }
            _ => Err(RevealError::CannotAnswer {
                state: self.state_name(),
            }),
        }
    }

    /// Play again: any state back to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn reveal_count(&self) -> u8 {
        match self {
            Self::PartiallyRevealed { revealed, .. } => *revealed,
            _ => 0,
        }
    }

    pub fn remaining_reveals(&self) -> u8 {
        match self {
            Self::Ready { total } => *total,
            Self::PartiallyRevealed { revealed, total } => total.saturating_sub(*revealed),
            _ => 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Answered { .. })
    }
}
