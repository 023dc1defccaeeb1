use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::FeedbackStore;
use crate::errors::AppResult;
use crate::pages;

pub fn handle(cmd: &Commands, cfg: &Config, store: &FeedbackStore) -> AppResult<()> {
    if let Commands::Home { top } = cmd {
        let n = top.unwrap_or(cfg.top_places);
        print!("{}", pages::home::render(store.records(), n));
    }
    Ok(())
}
