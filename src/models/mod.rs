pub mod saved_game;
pub mod session;
pub mod stats;
pub mod tier;
pub mod word_bank;

pub use saved_game::{GameStateStore, SavedGame};
pub use session::{GameSession, GameStatus, GuessedLetters, MAX_MISSES};
pub use stats::{Stats, StatsStore};
pub use tier::Tier;
pub use word_bank::WordBank;
