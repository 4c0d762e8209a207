mod support;

use fresher_fest_core::{ActivityKind, ChallengeKind, GeneratedContent, GenerationParams};
use fresher_fest_genai::{GenAiError, GenerationFlow};
use serde_json::json;
use support::MockBackend;

fn riddle_response(appropriate: bool) -> serde_json::Value {
    json!({
        "riddle": "What gets wetter the more it dries?",
        "answer": "A towel",
        "isAgeAppropriate": appropriate,
    })
}

#[tokio::test]
async fn generates_and_validates_truth_or_dare() {
    let backend = MockBackend::new();
    backend.push_response(json!({ "challenge": "Sing the campus anthem backwards" }));
    let flow = GenerationFlow::new(backend);

    let params = GenerationParams::new().with_challenge(ChallengeKind::Dare);
    let content = flow
        .generate(ActivityKind::TruthOrDare, &params)
        .await
        .unwrap();

    assert_eq!(
        content,
        GeneratedContent::TruthOrDare {
            challenge: "Sing the campus anthem backwards".to_string(),
        }
    );

    let requests = flow.backend().requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].instruction.contains("dare challenge"));
    // Truth-or-dare rides with explicit safety thresholds
    assert!(requests[0].safety.is_some());
}

#[tokio::test]
async fn topic_reaches_the_instruction() {
    let backend = MockBackend::new();
    backend.push_response(json!({ "questions": ["Cats or dogs?"] }));
    let flow = GenerationFlow::new(backend);

    let params = GenerationParams::new().with_topic("pets").with_count(1);
    flow.generate(ActivityKind::RapidFire, &params)
        .await
        .unwrap();

    let requests = flow.backend().requests();
    assert!(requests[0].instruction.contains("on the topic of pets"));
    assert!(requests[0].safety.is_none());
}

#[tokio::test]
async fn invalid_params_fail_before_dispatch() {
    let backend = MockBackend::new();
    let flow = GenerationFlow::new(backend);

    let params = GenerationParams::new().with_topic("space");
    let result = flow.generate(ActivityKind::Riddle, &params).await;

    assert!(matches!(result, Err(GenAiError::Configuration(_))));
    assert_eq!(flow.backend().request_count(), 0);
}

#[tokio::test]
async fn malformed_response_is_schema_mismatch() {
    let backend = MockBackend::new();
    backend.push_response(json!({ "riddle": "half a riddle" }));
    let flow = GenerationFlow::new(backend);

    let result = flow
        .generate(ActivityKind::Riddle, &GenerationParams::new())
        .await;

    assert!(matches!(result, Err(GenAiError::SchemaMismatch(_))));
}

#[tokio::test]
async fn riddle_retries_until_appropriate() {
    let backend = MockBackend::new();
    backend.push_response(riddle_response(false));
    backend.push_response(riddle_response(false));
    backend.push_response(riddle_response(true));
    let flow = GenerationFlow::new(backend);

    let content = flow.generate_riddle().await.unwrap();

    assert!(content.is_age_appropriate());
    assert_eq!(flow.backend().request_count(), 3);
}

#[tokio::test]
async fn riddle_retry_budget_is_bounded() {
    let backend = MockBackend::new();
    for _ in 0..10 {
        backend.push_response(riddle_response(false));
    }
    let flow = GenerationFlow::new(backend);

    let result = flow.generate_riddle().await;

    assert!(matches!(
        result,
        Err(GenAiError::RetryExhausted { attempts: 3 })
    ));
    assert_eq!(flow.backend().request_count(), 3);
}

#[tokio::test]
async fn backend_failure_passes_through_without_retry() {
    let backend = MockBackend::new();
    backend.push_error(GenAiError::BackendUnavailable("connection reset".to_string()));
    let flow = GenerationFlow::new(backend);

    let result = flow.generate_riddle().await;

    assert!(matches!(result, Err(GenAiError::BackendUnavailable(_))));
    assert_eq!(flow.backend().request_count(), 1);
}
