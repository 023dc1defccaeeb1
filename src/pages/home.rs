use super::APP_TITLE;
use crate::core::{count_by_emotion, count_by_place, top_n};
use crate::models::{Emotion, FeedbackRecord};
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, GREY, RESET, YELLOW};
use crate::utils::formatting::{pad_left, pad_right, plural};
use unicode_width::UnicodeWidthStr;

/// Home page: totals and the `top` most mentioned places.
pub fn render(records: &[FeedbackRecord], top: usize) -> String {
    let mut out = header(APP_TITLE);
    out.push_str("Le campus, raconté anonymement par celles et ceux qui le vivent.\n\n");

    let places = count_by_place(records);
    out.push_str(&format!(
        "{} · {}\n",
        plural(records.len(), "message", "messages"),
        plural(places.len(), "lieu", "lieux")
    ));

    if let Some(mood) = top_n(&count_by_emotion(records), 1).first() {
        out.push_str(&format!("Humeur dominante : {}\n", Emotion::new(mood.name.clone()).painted()));
    }
    out.push('\n');

    let best = top_n(&places, top);
    if best.is_empty() {
        out.push_str(&format!("{GREY}Aucun lieu mentionné pour l'instant.{RESET}\n"));
        return out;
    }

    out.push_str(&format!("{BOLD}Lieux les plus cités{RESET}\n"));
    let name_w = best
        .iter()
        .map(|e| UnicodeWidthStr::width(e.name.as_str()))
        .max()
        .unwrap_or(0);
    for (rank, entry) in best.iter().enumerate() {
        out.push_str(&format!(
            "  {YELLOW}{}.{RESET} {}  {}\n",
            rank + 1,
            pad_right(&entry.name, name_w),
            pad_left(&plural(entry.value, "mention", "mentions"), 11),
        ));
    }

    out
}
