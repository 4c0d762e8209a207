use async_trait::async_trait;
use cucumber::World;
use fresher_fest_core::{
    ActivityKind, GeneratedContent, GenerationParams, Leaderboard, RevealState,
};
use fresher_fest_genai::{BackendRequest, GenAiError, GenerationBackend, GenerationFlow};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct ScriptState {
    responses: VecDeque<Result<Value, GenAiError>>,
    requests: Vec<BackendRequest>,
}

/// Scripted backend shared between the world and the flow under test:
/// answers from a queue and records every request for assertions.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    state: Rc<RefCell<ScriptState>>,
}

impl ScriptedBackend {
    pub fn push_response(&self, response: Value) {
        self.state.borrow_mut().responses.push_back(Ok(response));
    }

    pub fn push_error(&self, error: GenAiError) {
        self.state.borrow_mut().responses.push_back(Err(error));
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    pub fn requests(&self) -> Vec<BackendRequest> {
        self.state.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, request: BackendRequest) -> Result<Value, GenAiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request);
        state.responses.pop_front().unwrap_or_else(|| {
            Err(GenAiError::BackendUnavailable(
                "scripted backend queue empty".to_string(),
            ))
        })
    }
}

#[derive(World)]
#[world(init = Self::new)]
pub struct FestWorld {
    /// Handle onto the same script the flow's backend reads from
    pub backend: ScriptedBackend,

    /// The generation pipeline under test
    pub flow: GenerationFlow<ScriptedBackend>,

    /// Parameters accumulated by Given steps
    pub params: GenerationParams,

    /// Outcome of the last generation
    pub last_content: Option<GeneratedContent>,
    pub last_error: Option<GenAiError>,

    /// Reveal machine for hint/guess scenarios
    pub reveal: RevealState,
    pub canonical: String,
    pub last_judgement: Option<bool>,

    pub leaderboard: Leaderboard,
}

impl FestWorld {
    fn new() -> Self {
        let backend = ScriptedBackend::default();
        Self {
            flow: GenerationFlow::new(backend.clone()),
            backend,
            params: GenerationParams::new(),
            last_content: None,
            last_error: None,
            reveal: RevealState::new(),
            canonical: String::new(),
            last_judgement: None,
            leaderboard: Leaderboard::new(),
        }
    }

    /// Run one generation and store the outcome
    pub async fn run_generation(&mut self, kind: ActivityKind) {
        let params = self.params.clone();
        match self.flow.generate(kind, &params).await {
            Ok(content) => {
                self.last_content = Some(content);
                self.last_error = None;
            }
            Err(error) => {
                self.last_content = None;
                self.last_error = Some(error);
            }
        }
    }

    /// Run the predicate-gated riddle flow and store the outcome
    pub async fn run_riddle(&mut self) {
        match self.flow.generate_riddle().await {
            Ok(content) => {
                self.last_content = Some(content);
                self.last_error = None;
            }
            Err(error) => {
                self.last_content = None;
                self.last_error = Some(error);
            }
        }
    }

    pub fn last_content(&self) -> &GeneratedContent {
        self.last_content.as_ref().expect("no content generated")
    }

    pub fn last_error(&self) -> &GenAiError {
        self.last_error.as_ref().expect("generation did not fail")
    }
}

impl fmt::Debug for FestWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FestWorld")
            .field("params", &self.params)
            .field("last_content", &self.last_content)
            .field("last_error", &self.last_error)
            .field("reveal", &self.reveal)
            .field("canonical", &self.canonical)
            .field("last_judgement", &self.last_judgement)
            .field("leaderboard", &self.leaderboard)
            .field("request_count", &self.backend.request_count())
            .finish_non_exhaustive()
    }
}
