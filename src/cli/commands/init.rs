use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write the default configuration file.
///
/// With `--test` nothing is written; the YAML is only printed.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::default();

    println!("⚙️  Initializing ExprimeTonCampus…");

    if cli.test {
        info(format!("Test mode: {} not written", path.display()));
        print!("{}", cfg.to_yaml()?);
        return Ok(());
    }

    cfg.save(&path)?;
    println!("🎉 Initialization completed!");
    Ok(())
}
