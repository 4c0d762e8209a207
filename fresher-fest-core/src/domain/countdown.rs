use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Seconds for the one-minute fitness challenge
pub const FITNESS_CHALLENGE_SECS: u32 = 60;

/// Seconds granted per rapid-fire question
pub const SECS_PER_RAPID_FIRE_QUESTION: u32 = 10;

/// Outcome of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still counting; seconds left
    Running(u32),
    /// Reached zero on this tick; the countdown stopped itself
    Finished,
    /// Tick arrived while not running (already finished or never started)
    Idle,
}

/// Pure once-per-second countdown state.
///
/// The scheduling side (an interval firing every second) lives in the UI
/// layer, which must drop its interval handle when the owning screen
/// unmounts. This type only answers "what happens on a tick".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            running: false,
        }
    }

    /// Countdown sized for a rapid-fire round of `question_count` questions
    pub fn for_rapid_fire(question_count: u8) -> Self {
        Self::new(u32::from(question_count) * SECS_PER_RAPID_FIRE_QUESTION)
    }

    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    /// Decrement by one second. Stops itself on reaching zero.
    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return CountdownTick::Finished;
        }
        CountdownTick::Running(self.remaining)
    }

    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(FITNESS_CHALLENGE_SECS)
    }
}
