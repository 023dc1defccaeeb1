use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::FeedbackStore;
use crate::errors::{AppError, AppResult};
use crate::pages;

pub fn handle(cmd: &Commands, cfg: &Config, store: &FeedbackStore) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let rec = store.get(*id).ok_or(AppError::RecordNotFound(*id))?;
        print!("{}", pages::detail::render(rec, cfg.wrap_width));
    }
    Ok(())
}
