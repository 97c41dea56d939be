use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::session::{GameSession, GuessedLetters};
use super::stats::write_file;
use crate::error::StoreError;

/// Snapshot of an unfinished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub secret_word: String,
    pub guessed_letters: GuessedLetters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl SavedGame {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            secret_word: session.secret_word().to_string(),
            guessed_letters: session.guessed_letters().clone(),
            saved_at: Some(Local::now().to_rfc3339()),
        }
    }

    fn is_valid(&self) -> bool {
        let is_upper_letter = |c: char| c.is_ascii_uppercase();
        !self.secret_word.is_empty()
            && self.secret_word.chars().all(is_upper_letter)
            && self.guessed_letters.keys().all(|c| is_upper_letter(*c))
    }

    pub fn into_session(self) -> Option<GameSession> {
        GameSession::new(&self.secret_word, self.guessed_letters).ok()
    }
}

/// The single resumable save slot.
#[derive(Debug, Clone)]
pub struct GameStateStore {
    path: PathBuf,
}

impl GameStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// The saved game, or `None` when there is none or it cannot be parsed.
    pub fn load(&self) -> Option<SavedGame> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Could not read saved game {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<SavedGame>(&contents) {
            Ok(saved) if saved.is_valid() => Some(saved),
            Ok(_) => {
                log::warn!("Ignoring invalid saved game {}", self.path.display());
                None
            }
            Err(e) => {
                log::warn!("Ignoring corrupt saved game {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, session: &GameSession) -> Result<(), StoreError> {
        let contents = serde_json::to_string(&SavedGame::from_session(session))?;
        write_file(&self.path, &contents)?;
        log::info!(
            "Game saved ({} letters guessed)",
            session.guessed_letters().len()
        );
        Ok(())
    }

    /// Removes the save. Clearing an empty slot is a no-op.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Saved game cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
