use crate::cli::parser::Commands;
use crate::core::{FeedbackStore, count_by_emotion, count_by_place, select};
use crate::errors::AppResult;
use crate::export::{ExportTarget, ensure_writable, export_counts, export_records};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, store: &FeedbackStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        query,
        period,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let selected = select(store.records(), query.as_deref(), period.as_deref())?;

        if selected.is_empty() {
            warning("No messages found for the selected filter.");
        }

        ensure_writable(&path, *force)?;

        match what {
            ExportTarget::Records => export_records(&selected, *format, &path)?,
            ExportTarget::Places => export_counts(&count_by_place(&selected), *format, &path)?,
            ExportTarget::Emotions => {
                export_counts(&count_by_emotion(&selected), *format, &path)?
            }
        }
    }
    Ok(())
}
