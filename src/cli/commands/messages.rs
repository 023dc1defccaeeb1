use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{FeedbackStore, select};
use crate::errors::AppResult;
use crate::pages;

pub fn handle(cmd: &Commands, cfg: &Config, store: &FeedbackStore) -> AppResult<()> {
    if let Commands::Messages { query, period } = cmd {
        let selected = select(store.records(), query.as_deref(), period.as_deref())?;
        let shown_query = query.as_deref().map(str::trim).unwrap_or("");
        print!(
            "{}",
            pages::messages::render(&selected, shown_query, cfg.preview_width)
        );
    }
    Ok(())
}
