pub mod genai_provider;

pub use genai_provider::{GenAiProvider, GenAiProviderProps};
