use std::io::{self, BufRead, Write};

use crate::display::{self, CLEAR_SCREEN};
use crate::error::GuessError;
use crate::models::{GameSession, GuessedLetters, Stats, Tier};

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame(Tier),
    Continue,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "4" => Some(MenuChoice::Continue),
            "5" => Some(MenuChoice::Quit),
            key => Tier::ALL
                .into_iter()
                .find(|tier| key.len() == 1 && key.starts_with(tier.menu_key()))
                .map(MenuChoice::NewGame),
        }
    }
}

/// Validates raw guess input against the letters already tried.
pub fn validate_guess(input: &str, guessed: &GuessedLetters) -> Result<char, GuessError> {
    let mut chars = input.trim().chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), None) => letter,
        _ => return Err(GuessError::WrongLength),
    };
    if !letter.is_ascii_alphabetic() {
        return Err(GuessError::NotALetter);
    }
    let letter = letter.to_ascii_uppercase();
    if guessed.contains_key(&letter) {
        return Err(GuessError::AlreadyGuessed(letter));
    }
    Ok(letter)
}

/// Line-oriented console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prompts and reads one line, replacing invalid UTF-8. Closed input is `UnexpectedEof`.
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Re-prompts until the player enters a letter not yet guessed.
    pub fn prompt_guess(&mut self, guessed: &GuessedLetters) -> io::Result<char> {
        loop {
            let line = self.read_line("Guess a letter: ")?;
            match validate_guess(&line, guessed) {
                Ok(letter) => return Ok(letter),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }

    pub fn main_menu(&mut self, stats: &Stats, has_saved_game: bool) -> io::Result<MenuChoice> {
        self.clear()?;
        write!(self.output, "{}", display::render_menu(stats, has_saved_game))?;
        loop {
            let line = self.read_line("Choose an option (1-5): ")?;
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => self.say("Enter a number between 1 and 5.")?,
            }
        }
    }

    pub fn render_state(&mut self, session: &GameSession) -> io::Result<()> {
        self.clear()?;
        write!(self.output, "{}", display::render_state(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::NewGame(Tier::Easy)));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::NewGame(Tier::Medium)));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::NewGame(Tier::Hard)));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Continue));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Quit));
        for bad in ["", "0", "6", "12", "one", "1.0"] {
            assert_eq!(MenuChoice::parse(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn guess_validation_messages() {
        let guessed = GuessedLetters::from([('E', true)]);
        assert_eq!(validate_guess("ab", &guessed), Err(GuessError::WrongLength));
        assert_eq!(validate_guess("  \n", &guessed), Err(GuessError::WrongLength));
        assert_eq!(validate_guess("3", &guessed), Err(GuessError::NotALetter));
        assert_eq!(validate_guess("é", &guessed), Err(GuessError::NotALetter));
        assert_eq!(validate_guess("e", &guessed), Err(GuessError::AlreadyGuessed('E')));
        assert_eq!(validate_guess(" q\n", &guessed), Ok('Q'));

        assert_eq!(GuessError::WrongLength.to_string(), "Enter a single letter.");
        assert_eq!(GuessError::NotALetter.to_string(), "Enter a LETTER.");
        assert_eq!(
            GuessError::AlreadyGuessed('E').to_string(),
            "You've already guessed that. Try again."
        );
    }

    #[test]
    fn prompt_guess_reprompts_until_valid() {
        let guessed = GuessedLetters::from([('A', true)]);
        let mut console = console("xy\n7\na\nb\n");
        assert_eq!(console.prompt_guess(&guessed).unwrap(), 'B');

        let out = output(console);
        assert_eq!(out.matches("Guess a letter: ").count(), 4);
        assert!(out.contains("Enter a single letter."));
        assert!(out.contains("Enter a LETTER."));
        assert!(out.contains("You've already guessed that. Try again."));
    }

    #[test]
    fn prompt_guess_never_returns_a_known_letter() {
        let mut guessed = GuessedLetters::new();
        let mut console = console("c\nC\na\nt\nc\nz\n");
        for expected in ['C', 'A', 'T', 'Z'] {
            let letter = console.prompt_guess(&guessed).unwrap();
            assert_eq!(letter, expected);
            assert!(guessed.insert(letter, true).is_none());
        }
        assert_eq!(guessed.len(), 4);
    }

    #[test]
    fn invalid_utf8_is_rejected_and_reprompted() {
        let mut input = vec![0xFF, b'\n', b'a', 0xC3, b'\n'];
        input.extend_from_slice(b"k\n");
        let mut console = Console::new(Cursor::new(input), Vec::new(), false);
        assert_eq!(console.prompt_guess(&GuessedLetters::new()).unwrap(), 'K');

        let out = output(console);
        assert!(out.contains("Enter a LETTER."));
        assert!(out.contains("Enter a single letter."));
    }

    #[test]
    fn closed_input_is_unexpected_eof() {
        let mut console = console("");
        let err = console.prompt_guess(&GuessedLetters::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn main_menu_loops_until_a_valid_choice() {
        let mut console = console("9\nhello\n4\n");
        let choice = console.main_menu(&Stats { wins: 2, losses: 1 }, false).unwrap();
        assert_eq!(choice, MenuChoice::Continue);

        let out = output(console);
        assert!(out.contains("Wins: 2 | Losses: 1"));
        assert_eq!(out.matches("Enter a number between 1 and 5.").count(), 2);
    }
}
