use cucumber::{given, then, when};
use fresher_fest_core::RevealError;
use fresher_fest_tests::FestWorld;

// ===== Given Steps =====

#[given(expr = "a round with {int} revealable stages")]
async fn round_with_stages(world: &mut FestWorld, total: u8) {
    world.reveal.begin_generation().expect("round already started");
    world.reveal.content_ready(total).expect("content already arrived");
}

#[given(expr = "the canonical answer is {string}")]
async fn canonical_answer(world: &mut FestWorld, answer: String) {
    world.canonical = answer;
}

// ===== When Steps =====

#[when(expr = "the player reveals {int} stage(s)")]
async fn player_reveals(world: &mut FestWorld, count: u8) {
    for step in 1..=count {
        let revealed = world.reveal.reveal_next().expect("reveal rejected");
        assert_eq!(revealed, step, "reveals must advance one stage at a time");
    }
}

#[when(expr = "the player guesses {string}")]
async fn player_guesses(world: &mut FestWorld, guess: String) {
    let canonical = world.canonical.clone();
    let judgement = world
        .reveal
        .answer(&guess, &canonical)
        .expect("guess rejected");
    world.last_judgement = Some(judgement);
}

// ===== Then Steps =====

#[then(expr = "{int} stages are revealed and {int} remain")]
async fn stages_revealed_and_remaining(world: &mut FestWorld, revealed: u8, remaining: u8) {
    assert_eq!(world.reveal.reveal_count(), revealed);
    assert_eq!(world.reveal.remaining_reveals(), remaining);
}

#[then("revealing another stage is rejected")]
async fn reveal_rejected(world: &mut FestWorld) {
    assert!(matches!(
        world.reveal.reveal_next(),
        Err(RevealError::AllRevealed { .. })
    ));
}

#[then("the guess is judged correct")]
async fn guess_correct(world: &mut FestWorld) {
    assert_eq!(world.last_judgement, Some(true));
}

#[then("the guess is judged wrong")]
async fn guess_wrong(world: &mut FestWorld) {
    assert_eq!(world.last_judgement, Some(false));
}

#[then("the round is over")]
async fn round_is_over(world: &mut FestWorld) {
    assert!(world.reveal.is_terminal());
    assert!(matches!(
        world.reveal.answer("anything", "anything"),
        Err(RevealError::CannotAnswer { .. })
    ));
}
