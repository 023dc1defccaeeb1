// src/export/model.rs

use crate::models::FeedbackRecord;
use serde::Serialize;

/// Flat export row. Field names match the import header, so an exported
/// file can be imported again (`emotion_label` is ignored on the way in).
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: u32,
    pub date: String,
    pub place: String,
    pub emotion: String,
    pub emotion_label: String,
    pub text: String,
}

impl RecordExport {
    pub const HEADERS: &'static [&'static str] =
        &["id", "date", "place", "emotion", "emotion_label", "text"];
}

impl From<&FeedbackRecord> for RecordExport {
    fn from(r: &FeedbackRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.clone(),
            place: r.place.clone(),
            emotion: r.emotion.as_str().to_string(),
            emotion_label: r.emotion.label().to_string(),
            text: r.text.clone(),
        }
    }
}
