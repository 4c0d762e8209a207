use cucumber::{given, then, when};
use fresher_fest_core::{ActivityKind, ChallengeKind, GeneratedContent};
use fresher_fest_genai::{GenAiError, DEFAULT_MAX_ATTEMPTS};
use fresher_fest_tests::FestWorld;
use serde_json::json;

// ===== Given Steps =====

#[given(expr = "the generator will answer with the challenge {string}")]
async fn generator_answers_challenge(world: &mut FestWorld, challenge: String) {
    world.backend.push_response(json!({ "challenge": challenge }));
}

#[given("the generator will answer with an empty object")]
async fn generator_answers_empty_object(world: &mut FestWorld) {
    world.backend.push_response(json!({}));
}

#[given(expr = "a requested question count of {int}")]
async fn requested_question_count(world: &mut FestWorld, count: u8) {
    world.params = world.params.clone().with_count(count);
}

#[given("the generator will answer with an unsuitable riddle")]
async fn generator_answers_unsuitable_riddle(world: &mut FestWorld) {
    world.backend.push_response(json!({
        "riddle": "Something a bit too edgy for orientation week.",
        "answer": "never shown",
        "isAgeAppropriate": false,
    }));
}

#[given(expr = "the generator will answer with the riddle {string} answered {string}")]
async fn generator_answers_riddle(world: &mut FestWorld, riddle: String, answer: String) {
    world.backend.push_response(json!({
        "riddle": riddle,
        "answer": answer,
        "isAgeAppropriate": true,
    }));
}

#[given("the generator will only answer with unsuitable riddles")]
async fn generator_only_answers_unsuitable(world: &mut FestWorld) {
    for _ in 0..DEFAULT_MAX_ATTEMPTS {
        generator_answers_unsuitable_riddle(world).await;
    }
}

// ===== When Steps =====

#[when("a dare challenge is requested")]
async fn dare_challenge_requested(world: &mut FestWorld) {
    world.params = world.params.clone().with_challenge(ChallengeKind::Dare);
    world.run_generation(ActivityKind::TruthOrDare).await;
}

#[when("an IQ question is requested")]
async fn iq_question_requested(world: &mut FestWorld) {
    world.run_generation(ActivityKind::IqTest).await;
}

#[when("rapid-fire questions are requested")]
async fn rapid_fire_requested(world: &mut FestWorld) {
    world.run_generation(ActivityKind::RapidFire).await;
}

#[when("a riddle is requested")]
async fn riddle_requested(world: &mut FestWorld) {
    world.run_riddle().await;
}

// ===== Then Steps =====

#[then(expr = "the content is the challenge {string}")]
async fn content_is_challenge(world: &mut FestWorld, expected: String) {
    match world.last_content() {
        GeneratedContent::TruthOrDare { challenge } => assert_eq!(challenge, &expected),
        other => panic!("expected a challenge, got {other:?}"),
    }
}

#[then(expr = "the content is the riddle {string}")]
async fn content_is_riddle(world: &mut FestWorld, expected: String) {
    match world.last_content() {
        GeneratedContent::Riddle { riddle, .. } => assert_eq!(riddle, &expected),
        other => panic!("expected a riddle, got {other:?}"),
    }
}

#[then("safety thresholds were attached to the request")]
async fn safety_attached(world: &mut FestWorld) {
    let requests = world.backend.requests();
    let request = requests.last().expect("no request was dispatched");
    assert!(request.safety.is_some(), "request carried no safety settings");
}

#[then("generation fails with a schema mismatch")]
async fn fails_with_schema_mismatch(world: &mut FestWorld) {
    assert!(matches!(
        world.last_error(),
        GenAiError::SchemaMismatch(_)
    ));
}

#[then("generation fails before any request is dispatched")]
async fn fails_before_dispatch(world: &mut FestWorld) {
    assert!(matches!(world.last_error(), GenAiError::Configuration(_)));
    assert_eq!(world.backend.request_count(), 0);
}

#[then("generation fails after exhausting the retry budget")]
async fn fails_after_retry_budget(world: &mut FestWorld) {
    match world.last_error() {
        GenAiError::RetryExhausted { attempts } => {
            assert_eq!(*attempts, DEFAULT_MAX_ATTEMPTS);
        }
        other => panic!("expected retry exhaustion, got {other:?}"),
    }
}

#[then(expr = "the generator was called {int} time(s)")]
async fn generator_call_count(world: &mut FestWorld, expected: usize) {
    assert_eq!(world.backend.request_count(), expected);
}
