use cucumber::{then, when};
use fresher_fest_tests::FestWorld;

#[when(expr = "{string} submits {int} reps of {string}")]
async fn submits_reps(world: &mut FestWorld, name: String, reps: u32, exercise: String) {
    world.leaderboard.submit(&exercise, name, reps);
}

#[then(expr = "the {string} board reads {string}")]
async fn board_reads(world: &mut FestWorld, exercise: String, expected: String) {
    let names: Vec<&str> = world
        .leaderboard
        .ranked(&exercise)
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    let expected: Vec<&str> = expected.split(", ").collect();
    assert_eq!(names, expected);
}

#[then(expr = "the {string} board is empty")]
async fn board_is_empty(world: &mut FestWorld, exercise: String) {
    assert!(world.leaderboard.is_empty(&exercise));
}
