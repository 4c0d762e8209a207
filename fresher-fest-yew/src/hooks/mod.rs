pub mod use_countdown;
pub mod use_generation;

pub use use_countdown::{use_countdown, CountdownHandle};
pub use use_generation::{use_genai, use_generation, GenerationHandle, GenerationPhase};
