use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::FeedbackStore;
use crate::errors::AppResult;
use crate::pages;

pub fn handle(cmd: &Commands, cfg: &Config, store: &FeedbackStore) -> AppResult<()> {
    if let Commands::Stats { sort, plain } = cmd {
        let out = if *plain {
            pages::stats::render_plain(store.records(), *sort)
        } else {
            pages::stats::render(store.records(), *sort, cfg)
        };
        print!("{out}");
    }
    Ok(())
}
