use crate::models::FeedbackRecord;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, colorize_optional};
use crate::utils::formatting::{plural, truncate};
use crate::utils::table::Table;

/// Message list: one row per record, text cut to `preview_width` characters.
pub fn render(records: &[FeedbackRecord], query: &str, preview_width: usize) -> String {
    let mut out = header("Messages");

    if !query.is_empty() {
        out.push_str(&format!("Filtre : \"{query}\"\n\n"));
    }

    if records.is_empty() {
        if query.is_empty() {
            out.push_str(&format!("{GREY}No messages yet.{RESET}\n"));
        } else {
            out.push_str(&format!("No messages match \"{query}\".\n"));
        }
        return out;
    }

    let mut table = Table::new(&["id", "date", "place", "emotion", "message"]);
    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            colorize_optional(&r.date),
            r.place.clone(),
            r.emotion.painted(),
            truncate(&r.text, preview_width),
        ]);
    }
    out.push_str(&table.render());
    out.push_str(&format!("\n{}\n", plural(records.len(), "message", "messages")));
    out
}
