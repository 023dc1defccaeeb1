use crate::models::FeedbackRecord;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::table::key_values;

/// Detail view of one message, body wrapped to `wrap_width` columns.
pub fn render(rec: &FeedbackRecord, wrap_width: usize) -> String {
    let mut out = header(format!("Message #{}", rec.id));
    out.push_str(&key_values(&[
        ("Lieu", rec.place.clone()),
        ("Émotion", rec.emotion.painted()),
        ("Date", colorize_optional(&rec.date)),
    ]));
    out.push('\n');

    for line in textwrap::wrap(&rec.text, wrap_width.max(10)) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
