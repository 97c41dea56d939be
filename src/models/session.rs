use std::collections::BTreeMap;

use crate::error::{GuessError, SessionError};

/// Misses allowed before the game is lost; one less than the number of gallows stages.
pub const MAX_MISSES: usize = 6;

/// Uppercase letter -> whether it was guessed. Keys are exactly the letters tried so far.
pub type GuessedLetters = BTreeMap<char, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret_word: String,
    guessed_letters: GuessedLetters,
}

impl GameSession {
    /// Starts or restores a game. The secret word is upper-cased and must be letters only.
    pub fn new(secret_word: &str, guessed_letters: GuessedLetters) -> Result<Self, SessionError> {
        if secret_word.is_empty() || !secret_word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SessionError::InvalidSecretWord(secret_word.to_string()));
        }

        Ok(Self {
            secret_word: secret_word.to_ascii_uppercase(),
            guessed_letters,
        })
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &GuessedLetters {
        &self.guessed_letters
    }

    fn is_guessed(&self, letter: char) -> bool {
        self.guessed_letters.get(&letter).copied().unwrap_or(false)
    }

    /// Guessed letters that are not in the secret word, alphabetically.
    pub fn missed_letters(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .filter(|(letter, guessed)| **guessed && !self.secret_word.contains(**letter))
            .map(|(letter, _)| *letter)
            .collect()
    }

    pub fn miss_count(&self) -> usize {
        self.missed_letters().len()
    }

    /// Gallows frame to show, 0 (empty) through MAX_MISSES (complete figure).
    pub fn stage(&self) -> usize {
        self.miss_count().min(MAX_MISSES)
    }

    /// The secret word with unguessed letters as `_`, space separated: `C A _`.
    pub fn reveal_pattern(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| if self.is_guessed(c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_won(&self) -> bool {
        self.secret_word.chars().all(|c| self.is_guessed(c))
    }

    pub fn is_lost(&self) -> bool {
        !self.is_won() && self.miss_count() >= MAX_MISSES
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Checks a guess without applying it. Returns the normalised uppercase letter.
    fn check_guess(&self, letter: char) -> Result<char, GuessError> {
        if self.status().is_over() {
            return Err(GuessError::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter);
        }
        let letter = letter.to_ascii_uppercase();
        if self.guessed_letters.contains_key(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }
        Ok(letter)
    }

    pub fn guess(&mut self, letter: char) -> Result<GameStatus, GuessError> {
        let letter = self.check_guess(letter)?;
        self.guessed_letters.insert(letter, true);

        let status = self.status();
        log::debug!(
            "Guessed {} ({}), misses {}/{}, status {:?}",
            letter,
            if self.secret_word.contains(letter) { "hit" } else { "miss" },
            self.miss_count(),
            MAX_MISSES,
            status
        );
        Ok(status)
    }
}
