use crate::error::Result;
use crate::safety::SafetySettings;
use async_trait::async_trait;
use serde_json::Value;

/// One request crossing the generation boundary
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    /// Fully rendered instruction text
    pub instruction: String,

    /// Shape descriptor the backend's structured output must satisfy
    pub response_schema: Value,

    /// Optional per-activity content-safety thresholds
    pub safety: Option<SafetySettings>,
}

/// The external generation service (allows mocking in tests).
///
/// Implementations return the backend's raw structured output; schema
/// validation and retries are the caller's responsibility. Futures are not
/// required to be `Send` since everything runs on the wasm event loop.
#[async_trait(?Send)]
pub trait GenerationBackend {
    async fn generate(&self, request: BackendRequest) -> Result<Value>;
}
