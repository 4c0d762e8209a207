use crate::schema::ValidationError;
use fresher_fest_core::ParamError;

/// Generation boundary errors.
///
/// Everything except `Configuration` is recoverable: the UI surfaces a
/// notice and the screen returns to idle with a retry affordance.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// Unknown template/schema or parameters that violate the activity's
    /// declared inputs. A caller bug, not a runtime condition.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network or service failure talking to the generation backend
    #[error("generation backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend answered, but not in the declared shape
    #[error("response did not match the expected shape: {0}")]
    SchemaMismatch(#[from] ValidationError),

    /// The content predicate never passed within the attempt budget
    #[error("no acceptable content produced within {attempts} attempts")]
    RetryExhausted { attempts: u32 },
}

impl From<ParamError> for GenAiError {
    fn from(err: ParamError) -> Self {
        Self::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GenAiError>;
