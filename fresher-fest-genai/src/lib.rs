//! # Fresher Fest GenAI
//!
//! The generation boundary for the party-game activities: prompt templates,
//! declarative output schemas, safety thresholds, bounded retry, and a
//! Gemini `generateContent` backend (gloo-net on wasm32, reqwest natively).

pub mod backend;
pub mod config;
pub mod error;
pub mod flow;
pub mod gemini;
pub mod prompt;
pub mod retry;
pub mod safety;
pub mod schema;

pub use backend::{BackendRequest, GenerationBackend};
pub use config::Config;
pub use error::GenAiError;
pub use flow::GenerationFlow;
pub use gemini::GeminiClient;
pub use prompt::{template_for, PromptTemplate};
pub use retry::{with_retry, DEFAULT_MAX_ATTEMPTS};
pub use safety::{HarmCategory, HarmThreshold, SafetySettings};
pub use schema::{schema_for, OutputSchema, ValidationError};
