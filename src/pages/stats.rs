use crate::config::Config;
use crate::core::{count_by_emotion, count_by_place, top_n};
use crate::models::{CountEntry, Emotion, FeedbackRecord};
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, CYAN, GREY, RESET};
use crate::utils::formatting::{bar, pad_left, pad_right};
use crate::utils::table::visible_width;

/// Statistics page: one bar chart per place, one per emotion.
pub fn render(records: &[FeedbackRecord], sorted: bool, cfg: &Config) -> String {
    let (places, emotions) = counts(records, sorted);

    let mut out = header("Statistiques");
    out.push_str(&chart("Messages par lieu", &places, |n| n.to_string(), cfg));
    out.push('\n');
    out.push_str(&chart(
        "Messages par émotion",
        &emotions,
        |n| Emotion::new(n).painted(),
        cfg,
    ));
    out
}

/// Same data as [`render`] without colors or bars.
pub fn render_plain(records: &[FeedbackRecord], sorted: bool) -> String {
    let (places, emotions) = counts(records, sorted);
    format!(
        "# places\n{}\n# emotions\n{}",
        plain(&places),
        plain(&emotions)
    )
}

fn counts(records: &[FeedbackRecord], sorted: bool) -> (Vec<CountEntry>, Vec<CountEntry>) {
    let places = count_by_place(records);
    let emotions = count_by_emotion(records);
    if sorted {
        (top_n(&places, places.len()), top_n(&emotions, emotions.len()))
    } else {
        (places, emotions)
    }
}

/// A labelled horizontal bar chart of `entries`.
pub fn chart<F>(title: &str, entries: &[CountEntry], label: F, cfg: &Config) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = format!("{BOLD}{title}{RESET}\n");
    if entries.is_empty() {
        out.push_str(&format!("  {GREY}(aucune donnée){RESET}\n"));
        return out;
    }

    let labels: Vec<String> = entries.iter().map(|e| label(&e.name)).collect();
    let label_w = labels.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let max = entries.iter().map(|e| e.value).max().unwrap_or(0);
    let value_w = max.to_string().len();

    for (entry, lbl) in entries.iter().zip(&labels) {
        let pad = " ".repeat(label_w.saturating_sub(visible_width(lbl)));
        out.push_str(&format!(
            "  {lbl}{pad} {} {CYAN}{}{RESET}\n",
            pad_left(&entry.value.to_string(), value_w),
            bar(entry.value, max, cfg.bar_width, &cfg.bar_char),
        ));
    }
    out
}

/// `name value` lines, names aligned.
pub fn plain(entries: &[CountEntry]) -> String {
    let w = entries.iter().map(|e| visible_width(&e.name)).max().unwrap_or(0);
    entries
        .iter()
        .map(|e| format!("{} {}\n", pad_right(&e.name, w), e.value))
        .collect()
}
