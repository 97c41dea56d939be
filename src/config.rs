use std::path::{Path, PathBuf};

const STATS_FILE: &str = "hangman_stats.json";
const GAME_STATE_FILE: &str = "game_state.json";
const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Where the word list is read from and where stats and the saved game live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub words_file: PathBuf,
    pub stats_file: PathBuf,
    pub game_state_file: PathBuf,
}

impl AppPaths {
    pub fn resolve(words: Option<&Path>, data_dir: Option<&Path>) -> Self {
        let data_dir = data_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(default_data_dir);

        Self {
            words_file: words
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_FILE)),
            stats_file: data_dir.join(STATS_FILE),
            game_state_file: data_dir.join(GAME_STATE_FILE),
        }
    }
}

/// `~/.config/hangman`, or the current directory when there is no home directory.
pub fn default_data_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".config").join("hangman"),
        None => {
            log::warn!("Could not determine home directory, keeping data in the current directory");
            PathBuf::from(".")
        }
    }
}
