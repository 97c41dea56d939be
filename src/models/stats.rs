use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::session::GameStatus;
use crate::error::StoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    pub fn games_played(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Percentage of games won, if any have been played.
    pub fn win_rate(&self) -> Option<f64> {
        match self.games_played() {
            0 => None,
            played => Some(f64::from(self.wins) * 100.0 / f64::from(played)),
        }
    }

    /// Counts a finished game. In-progress games are ignored.
    pub fn record(&mut self, outcome: GameStatus) {
        match outcome {
            GameStatus::Won => self.wins = self.wins.saturating_add(1),
            GameStatus::Lost => self.losses = self.losses.saturating_add(1),
            GameStatus::InProgress => {}
        }
    }
}

/// Win/loss counters persisted as `{"wins": n, "losses": n}`.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable stats start from zero.
    pub fn load(&self) -> Stats {
        if !self.path.exists() {
            return Stats::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt stats file {}: {}", self.path.display(), e);
                Stats::default()
            }),
            Err(e) => {
                log::warn!("Could not read stats file {}: {}", self.path.display(), e);
                Stats::default()
            }
        }
    }

    pub fn save(&self, stats: &Stats) -> Result<(), StoreError> {
        let contents = serde_json::to_string(stats)?;
        write_file(&self.path, &contents)?;
        log::info!("Stats saved ({} wins, {} losses)", stats.wins, stats.losses);
        Ok(())
    }
}

/// Overwrites `path`, creating its parent directory if needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), StoreError> {
    let to_store_error = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_store_error)?;
        }
    }

    fs::write(path, contents).map_err(to_store_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::TempDir;

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = TempDir::new("stats-missing");
        let store = StatsStore::new(dir.path().join("stats.json"));
        assert_eq!(store.load(), Stats::default());
    }

    #[test]
    fn corrupt_file_loads_as_zero() {
        let dir = TempDir::new("stats-corrupt");
        let path = dir.path().join("stats.json");
        fs::write(&path, "{\"wins\": \"lots\"").unwrap();
        assert_eq!(StatsStore::new(&path).load(), Stats::default());

        fs::write(&path, "{\"wins\": -1, \"losses\": 0}").unwrap();
        assert_eq!(StatsStore::new(&path).load(), Stats::default());
    }

    #[test]
    fn reads_the_documented_record() {
        let dir = TempDir::new("stats-read");
        let path = dir.path().join("stats.json");
        fs::write(&path, r#"{"wins": 2, "losses": 1}"#).unwrap();
        assert_eq!(StatsStore::new(&path).load(), Stats { wins: 2, losses: 1 });
    }

    #[test]
    fn save_creates_parent_dirs_and_overwrites() {
        let dir = TempDir::new("stats-save");
        let store = StatsStore::new(dir.path().join("nested").join("stats.json"));

        store.save(&Stats { wins: 1, losses: 4 }).unwrap();
        store.save(&Stats { wins: 3, losses: 1 }).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"wins": 3, "losses": 1}));
    }

    #[test]
    fn record_and_win_rate() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_rate(), None);

        stats.record(GameStatus::Won);
        stats.record(GameStatus::Lost);
        stats.record(GameStatus::Won);
        stats.record(GameStatus::InProgress);
        stats.record(GameStatus::Won);

        assert_eq!(stats, Stats { wins: 3, losses: 1 });
        assert_eq!(stats.games_played(), 4);
        assert_eq!(stats.win_rate(), Some(75.0));
    }

    #[test]
    fn counters_saturate_at_the_maximum() {
        let mut stats = Stats {
            wins: u32::MAX,
            losses: 3,
        };
        assert_eq!(stats.games_played(), u32::MAX);

        stats.record(GameStatus::Won);
        stats.record(GameStatus::Lost);
        assert_eq!(stats, Stats { wins: u32::MAX, losses: 4 });
        assert!(stats.win_rate().is_some());
    }
}
