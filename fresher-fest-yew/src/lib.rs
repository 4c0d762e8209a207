//! # Fresher Fest Yew Components
//!
//! Activity screens for the orientation party games. Every screen is a thin
//! form-and-display shell around the core/genai operations; screen state is
//! owned per session and passed down explicitly.

pub mod app;
pub mod components;
pub mod hooks;
pub mod providers;

pub use app::App;
pub use hooks::{use_countdown, use_generation, use_genai, GenerationPhase};
pub use providers::{GenAiProvider, GenAiProviderProps};
