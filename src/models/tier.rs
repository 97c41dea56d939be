use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Medium => "Medium",
            Tier::Hard => "Hard",
        }
    }

    /// Menu digit that starts a new game on this tier.
    pub fn menu_key(&self) -> char {
        match self {
            Tier::Easy => '1',
            Tier::Medium => '2',
            Tier::Hard => '3',
        }
    }

    /// Matches a word-list section header such as `[Easy]`, ignoring case.
    pub fn from_header(line: &str) -> Option<Tier> {
        let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_match_regardless_of_case() {
        assert_eq!(Tier::from_header("[Easy]"), Some(Tier::Easy));
        assert_eq!(Tier::from_header("[MEDIUM]"), Some(Tier::Medium));
        assert_eq!(Tier::from_header("[ hard ]"), Some(Tier::Hard));
    }

    #[test]
    fn non_headers_are_rejected() {
        assert_eq!(Tier::from_header("Easy"), None);
        assert_eq!(Tier::from_header("[Extreme]"), None);
        assert_eq!(Tier::from_header("[Easy"), None);
    }

    #[test]
    fn menu_keys_follow_tier_order() {
        let keys: Vec<char> = Tier::ALL.iter().map(Tier::menu_key).collect();
        assert_eq!(keys, vec!['1', '2', '3']);
    }
}
