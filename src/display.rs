use crate::models::{GameSession, SavedGame, Stats, MAX_MISSES};

/// Gallows frames indexed by miss count.
pub const HANGMAN_PICS: [&str; MAX_MISSES + 1] = [
    r"
   +---+
   |   |
       |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
   |   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  /    |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  / \  |
       |
=========",
];

/// ANSI erase-display plus cursor-home.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Gallows, missed letters and reveal pattern.
pub fn render_state(session: &GameSession) -> String {
    let missed: Vec<String> = session
        .missed_letters()
        .into_iter()
        .map(String::from)
        .collect();

    format!(
        "{}\n\nMissed letters: {}\n\n{}\n",
        HANGMAN_PICS[session.stage()],
        missed.join(" "),
        session.reveal_pattern()
    )
}

pub fn render_menu(stats: &Stats, has_saved_game: bool) -> String {
    let mut menu = String::new();
    menu.push_str(&format!("{}\n", "=".repeat(29)));
    menu.push_str("         HANGMAN GAME\n");
    menu.push_str(&format!("{}\n", "=".repeat(29)));
    menu.push_str(&format!("Wins: {} | Losses: {}\n", stats.wins, stats.losses));
    menu.push_str("1. New Game (Easy)\n");
    menu.push_str("2. New Game (Medium)\n");
    menu.push_str("3. New Game (Hard)\n");
    if has_saved_game {
        menu.push_str("4. Continue Saved Game\n");
    } else {
        menu.push_str("4. (No saved game)\n");
    }
    menu.push_str("5. Quit\n");
    menu
}

/// Summary printed by `hangman stats`.
pub fn render_stats(stats: &Stats, saved: Option<&SavedGame>) -> String {
    let win_rate = match stats.win_rate() {
        Some(rate) => format!("{:.1}%", rate),
        None => "n/a".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("Wins:         {}\n", stats.wins));
    out.push_str(&format!("Losses:       {}\n", stats.losses));
    out.push_str(&format!("Games played: {}\n", stats.games_played()));
    out.push_str(&format!("Win rate:     {}\n", win_rate));

    match saved {
        Some(saved) => {
            let since = saved.saved_at.as_deref().map(format_saved_at).unwrap_or_default();
            out.push_str(&format!("Saved game:   in progress{}\n", since));
            if let Some(session) = saved.clone().into_session() {
                out.push_str(&format!("              {}\n", session.reveal_pattern()));
            }
        }
        None => out.push_str("Saved game:   none\n"),
    }
    out
}

/// ` (saved 2026-10-17 14:03)`, or nothing if the timestamp is unreadable.
pub fn format_saved_at(saved_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(saved_at)
        .map(|time| format!(" (saved {})", time.format("%Y-%m-%d %H:%M")))
        .unwrap_or_default()
}
