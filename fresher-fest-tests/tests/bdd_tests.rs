use cucumber::World;
use fresher_fest_tests::FestWorld;

mod steps;

#[tokio::main]
async fn main() {
    FestWorld::cucumber()
        .max_concurrent_scenarios(1)
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
