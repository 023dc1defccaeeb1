use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::pages::static_pages;

/// `guide` and `about`: static pages, no data needed.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    match cmd {
        Commands::Guide => print!("{}", static_pages::guide()),
        Commands::About => print!("{}", static_pages::about()),
        _ => {}
    }
    Ok(())
}
