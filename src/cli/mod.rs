mod play;
mod stats_cmd;
mod words_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppPaths;
use crate::models::Tier;

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Terminal hangman with saved games and win/loss stats", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Word list with [Easy], [Medium] and [Hard] sections
    #[arg(long, global = true, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Directory holding the stats file and the saved game
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Do not clear the screen between turns
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Seed for word selection
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play interactively (default)
    Play,
    /// Show wins, losses and the saved game
    Stats,
    /// Zero the stats and discard the saved game
    Reset,
    /// Check the word list and show how many words each tier has
    Words {
        /// List the words of this tier
        #[arg(value_enum)]
        tier: Option<Tier>,
    },
}

pub fn run(cli: Cli) {
    let paths = AppPaths::resolve(cli.words.as_deref(), cli.data_dir.as_deref());
    log::debug!("Using {:?}", paths);

    match cli.command {
        None | Some(Commands::Play) => play::play(&paths, !cli.no_clear, cli.seed),
        Some(Commands::Stats) => stats_cmd::show_stats(&paths),
        Some(Commands::Reset) => stats_cmd::reset(&paths),
        Some(Commands::Words { tier }) => words_cmd::show_words(&paths, tier),
    }
}
