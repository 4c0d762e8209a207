use crate::backend::{BackendRequest, GenerationBackend};
use crate::error::Result;
use crate::prompt::template_for;
use crate::retry::{with_retry, DEFAULT_MAX_ATTEMPTS};
use crate::safety::SafetySettings;
use crate::schema::schema_for;
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams};
use instant::Instant;
use uuid::Uuid;

/// Orchestrates one generation round: parameter check, prompt rendering,
/// backend call, schema validation. Retries never happen here except for
/// the riddle flow's predicate-gated regeneration.
pub struct GenerationFlow<B> {
    backend: B,
}

impl<B: GenerationBackend> GenerationFlow<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Thresholds ride along only for the kinds whose originals declare
    /// them; the backend's defaults apply elsewhere.
    fn safety_for(kind: ActivityKind) -> Option<SafetySettings> {
        match kind {
            ActivityKind::Riddle | ActivityKind::TruthOrDare => {
                Some(SafetySettings::block_only_high())
            }
            _ => None,
        }
    }

    /// Generate and validate content for one activity.
    ///
    /// Params that violate the kind's declared inputs fail before anything
    /// is dispatched.
    pub async fn generate(
        &self,
        kind: ActivityKind,
        params: &GenerationParams,
    ) -> Result<GeneratedContent> {
        params.check_for(kind)?;
        let template = template_for(kind)?;
        let schema = schema_for(kind)?;

        let request_id = Uuid::new_v4();
        let started = Instant::now();
        tracing::info!(%request_id, activity = %kind, "dispatching generation request");

        let request = BackendRequest {
            instruction: template.render(params),
            response_schema: schema.to_response_schema(),
            safety: Self::safety_for(kind),
        };

        let raw = self.backend.generate(request).await?;
        let content = schema.validate(&raw)?;

        tracing::debug!(
            %request_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generation validated"
        );
        Ok(content)
    }

    /// Riddle flow: regenerate until the appropriateness flag passes,
    /// within the attempt budget.
    pub async fn generate_riddle(&self) -> Result<GeneratedContent> {
        let params = GenerationParams::new();
        with_retry(
            DEFAULT_MAX_ATTEMPTS,
            |attempt| {
                if attempt > 1 {
                    tracing::info!(attempt, "riddle rejected as unsuitable, regenerating");
                }
                self.generate(ActivityKind::Riddle, &params)
            },
            |content| content.is_age_appropriate(),
        )
        .await
    }
}
