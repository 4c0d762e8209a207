use async_trait::async_trait;
use fresher_fest_genai::{BackendRequest, GenAiError, GenerationBackend};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Scripted backend: answers from a queue and records every request
#[derive(Default)]
pub struct MockBackend {
    responses: RefCell<VecDeque<Result<Value, GenAiError>>>,
    requests: RefCell<Vec<BackendRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Value) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_error(&self, error: GenAiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl GenerationBackend for MockBackend {
    async fn generate(&self, request: BackendRequest) -> Result<Value, GenAiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GenAiError::BackendUnavailable(
                    "mock backend queue empty".to_string(),
                ))
            })
    }
}
