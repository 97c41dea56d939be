use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::Rng;

use super::tier::Tier;
use crate::error::WordBankError;

/// Words grouped by tier. Every tier holds at least one word.
#[derive(Debug, Clone)]
pub struct WordBank {
    tiers: BTreeMap<Tier, Vec<String>>,
}

impl WordBank {
    pub fn load_file(path: &Path) -> Result<Self, WordBankError> {
        let contents = fs::read_to_string(path).map_err(|source| WordBankError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&contents, &path.display().to_string())
    }

    /// Parses `[Easy]` / `[Medium]` / `[Hard]` sections with one word per line.
    /// `origin` names the source in error messages.
    pub fn load(source: &str, origin: &str) -> Result<Self, WordBankError> {
        let mut tiers: BTreeMap<Tier, Vec<String>> =
            Tier::ALL.into_iter().map(|tier| (tier, Vec::new())).collect();
        let mut current: Option<Tier> = None;
        let mut in_section = false;

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current = Tier::from_header(line);
                in_section = true;
                if current.is_none() {
                    log::warn!("{}:{}: unknown section {}, skipping its words", origin, number + 1, line);
                }
                continue;
            }

            let Some(tier) = current else {
                if in_section {
                    log::debug!("{}:{}: ignoring {:?} in unknown section", origin, number + 1, line);
                }
                continue;
            };

            if !line.chars().all(|c| c.is_ascii_alphabetic()) {
                log::warn!("{}:{}: skipping {:?}, words may only contain letters", origin, number + 1, line);
                continue;
            }

            if let Some(words) = tiers.get_mut(&tier) {
                words.push(line.to_ascii_uppercase());
            }
        }

        for (tier, words) in &tiers {
            if words.is_empty() {
                return Err(WordBankError::EmptyTier {
                    tier: *tier,
                    origin: origin.to_string(),
                });
            }
        }

        log::info!(
            "Loaded word list from {} ({} easy, {} medium, {} hard)",
            origin,
            tiers[&Tier::Easy].len(),
            tiers[&Tier::Medium].len(),
            tiers[&Tier::Hard].len()
        );

        Ok(Self { tiers })
    }

    pub fn words(&self, tier: Tier) -> &[String] {
        self.tiers.get(&tier).map(Vec::as_slice).unwrap_or_default()
    }

    /// Uniformly random word from `tier`.
    pub fn random_word<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> &str {
        let words = self.words(tier);
        &words[rng.random_range(0..words.len())]
    }
}
