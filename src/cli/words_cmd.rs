use crate::config::AppPaths;
use crate::models::{Tier, WordBank};

pub fn show_words(paths: &AppPaths, tier: Option<Tier>) {
    let words = match WordBank::load_file(&paths.words_file) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load words: {}", e);
            std::process::exit(1);
        }
    };

    match tier {
        Some(tier) => {
            println!("{} words ({}):", tier.display_name(), words.words(tier).len());
            for word in words.words(tier) {
                println!("  {}", word);
            }
        }
        None => {
            println!("Word list: {}", paths.words_file.display());
            for tier in Tier::ALL {
                println!("  {:<7} {}", tier.display_name(), words.words(tier).len());
            }
            println!();
            println!("To list a tier: hangman words <easy|medium|hard>");
        }
    }
}
