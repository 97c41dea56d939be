use crate::config::AppPaths;
use crate::display::render_stats;
use crate::models::{GameStateStore, Stats, StatsStore};

pub fn show_stats(paths: &AppPaths) {
    let stats = StatsStore::new(&paths.stats_file).load();
    let saved = GameStateStore::new(&paths.game_state_file).load();
    print!("{}", render_stats(&stats, saved.as_ref()));
}

pub fn reset(paths: &AppPaths) {
    let stats_store = StatsStore::new(&paths.stats_file);
    let game_store = GameStateStore::new(&paths.game_state_file);

    let previous = stats_store.load();
    if let Err(e) = stats_store.save(&Stats::default()) {
        eprintln!("Failed to reset stats: {}", e);
        std::process::exit(1);
    }
    println!(
        "Stats reset in {} (was {} wins, {} losses)",
        stats_store.path().display(),
        previous.wins,
        previous.losses
    );

    let had_save = game_store.exists();
    if let Err(e) = game_store.clear() {
        eprintln!("Failed to discard saved game: {}", e);
        std::process::exit(1);
    }
    if had_save {
        println!("Saved game discarded ({})", game_store.path().display());
    }
}
