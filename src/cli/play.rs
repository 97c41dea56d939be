use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AppPaths;
use crate::display::format_saved_at;
use crate::error::StoreError;
use crate::models::{GameSession, GameStateStore, GameStatus, GuessedLetters, Stats, StatsStore, Tier, WordBank};
use crate::prompt::{Console, MenuChoice};

pub fn play(paths: &AppPaths, clear_screen: bool, seed: Option<u64>) {
    let words = match WordBank::load_file(&paths.words_file) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load words: {}", e);
            std::process::exit(1);
        }
    };

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout(), clear_screen);
    let mut game = Hangman::new(
        words,
        StatsStore::new(&paths.stats_file),
        GameStateStore::new(&paths.game_state_file),
        rng,
        console,
    );

    if let Err(e) = game.run() {
        eprintln!("Console error: {}", e);
        std::process::exit(1);
    }
}

/// Menu loop plus one game at a time.
pub struct Hangman<R, W, G> {
    words: WordBank,
    stats_store: StatsStore,
    game_store: GameStateStore,
    rng: G,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write, G: Rng> Hangman<R, W, G> {
    pub fn new(
        words: WordBank,
        stats_store: StatsStore,
        game_store: GameStateStore,
        rng: G,
        console: Console<R, W>,
    ) -> Self {
        Self {
            words,
            stats_store,
            game_store,
            rng,
            console,
        }
    }

    #[cfg(test)]
    fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until the player quits or input closes.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stats = self.stats_store.load();

        loop {
            let choice = self.console.main_menu(&stats, self.game_store.exists());
            let choice = match choice {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => MenuChoice::Quit,
                Err(e) => return Err(e),
            };

            let (session, label) = match choice {
                MenuChoice::Quit => break,
                MenuChoice::NewGame(tier) => self.new_session(tier)?,
                MenuChoice::Continue => self.resume_session()?,
            };

            match self.play_session(session, &label) {
                Ok(finished) => self.finish(&finished, &mut stats)?,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    log::info!("Input closed mid-game, progress stays saved");
                    self.console.say("")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.console.say("Thanks for playing!")
    }

    fn new_session(&mut self, tier: Tier) -> io::Result<(GameSession, String)> {
        let word = self.words.random_word(tier, &mut self.rng);
        let session = GameSession::new(word, GuessedLetters::new())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        log::info!("New {} game ({} letters)", tier, session.secret_word().len());
        Ok((session, format!("Difficulty: {}", tier.display_name())))
    }

    fn resume_session(&mut self) -> io::Result<(GameSession, String)> {
        if !self.game_store.exists() {
            self.console.say("No saved game found. Starting a new Easy game.")?;
            return self.new_session(Tier::Easy);
        }

        let Some(saved) = self.game_store.load() else {
            self.console.say("Failed to load game. Starting new game.")?;
            return self.new_session(Tier::Easy);
        };

        let since = saved.saved_at.as_deref().map(format_saved_at).unwrap_or_default();
        match saved.into_session() {
            Some(session) => {
                log::info!(
                    "Resuming saved game ({} letters guessed)",
                    session.guessed_letters().len()
                );
                Ok((session, format!("Continuing saved game{}", since)))
            }
            None => {
                self.console.say("Failed to load game. Starting new game.")?;
                self.new_session(Tier::Easy)
            }
        }
    }

    /// Takes guesses until the session is won or lost, saving after each one.
    fn play_session(&mut self, mut session: GameSession, label: &str) -> io::Result<GameSession> {
        while !session.status().is_over() {
            self.console.render_state(&session)?;
            self.console.say(label)?;

            let letter = self.console.prompt_guess(session.guessed_letters())?;
            if let Err(e) = session.guess(letter) {
                self.console.say(&e.to_string())?;
                continue;
            }

            if let Err(e) = self.game_store.save(&session) {
                report_store_error("save game", &e);
            }
        }
        Ok(session)
    }

    fn finish(&mut self, session: &GameSession, stats: &mut Stats) -> io::Result<()> {
        let outcome = session.status();
        self.console.render_state(session)?;
        match outcome {
            GameStatus::Won => self.console.say(&format!(
                "You guessed it! The word was '{}'",
                session.secret_word()
            ))?,
            GameStatus::Lost => self.console.say(&format!(
                "You ran out of guesses! The word was '{}'",
                session.secret_word()
            ))?,
            GameStatus::InProgress => return Ok(()),
        }

        stats.record(outcome);
        if let Err(e) = self.stats_store.save(stats) {
            report_store_error("save stats", &e);
        }
        if let Err(e) = self.game_store.clear() {
            report_store_error("clear saved game", &e);
        }
        Ok(())
    }
}

fn report_store_error(action: &str, e: &StoreError) {
    log::error!("Could not {}: {}", action, e);
    eprintln!("Warning: could not {}: {}", action, e);
}
