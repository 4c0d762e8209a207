pub mod activity_card;
pub mod fitness_screen;
pub mod flirt_screen;
pub mod guess_the_name_screen;
pub mod iq_test_screen;
pub mod leaderboard_table;
pub mod notice;
pub mod rapid_fire_screen;
pub mod riddle_screen;
pub mod truth_or_dare_screen;
pub mod two_truths_screen;

pub use activity_card::ActivityCard;
pub use fitness_screen::FitnessScreen;
pub use flirt_screen::FlirtScreen;
pub use guess_the_name_screen::GuessTheNameScreen;
pub use iq_test_screen::IqTestScreen;
pub use leaderboard_table::LeaderboardTable;
pub use notice::{Notice, NoticeKind};
pub use rapid_fire_screen::RapidFireScreen;
pub use riddle_screen::RiddleScreen;
pub use truth_or_dare_screen::TruthOrDareScreen;
pub use two_truths_screen::TwoTruthsScreen;
