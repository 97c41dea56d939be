use std::io;
use std::path::PathBuf;

use crate::models::Tier;

/// The word list could not be turned into a playable bank. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum WordBankError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no words found for {tier} tier in {origin}")]
    EmptyTier { tier: Tier, origin: String },
}

/// A stats or saved-game file could not be written or removed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A rejected guess. The message is what the player is re-prompted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Enter a single letter.")]
    WrongLength,

    #[error("Enter a LETTER.")]
    NotALetter,

    #[error("You've already guessed that. Try again.")]
    AlreadyGuessed(char),

    #[error("The game is already over.")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("secret word {0:?} must be non-empty and contain only letters")]
    InvalidSecretWord(String),
}
