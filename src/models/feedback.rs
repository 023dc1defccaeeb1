use super::emotion::Emotion;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u32,
    pub place: String,     // free-form location label, never empty
    pub emotion: Emotion,  // open set, see Emotion::known
    pub text: String,      // raw body, not sanitized
    pub date: String,      // "YYYY-MM-DD", not validated
}

impl FeedbackRecord {
    pub fn new(
        id: u32,
        place: impl Into<String>,
        emotion: impl Into<Emotion>,
        text: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            place: place.into(),
            emotion: emotion.into(),
            text: text.into(),
            date: date.into(),
        }
    }

    /// Calendar date of the record, if `date` is a real `YYYY-MM-DD` day.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Case-insensitive substring match on the place label.
    pub fn place_contains(&self, needle: &str) -> bool {
        self.place.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_date_accepts_iso_days_only() {
        let ok = FeedbackRecord::new(1, "Cafétéria", "stress", "", "2025-03-14");
        assert_eq!(ok.parsed_date(), NaiveDate::from_ymd_opt(2025, 3, 14));

        let bad = FeedbackRecord::new(2, "Cafétéria", "stress", "", "2025-02-30");
        assert_eq!(bad.parsed_date(), None);

        let free = FeedbackRecord::new(3, "Cafétéria", "stress", "", "hier");
        assert_eq!(free.parsed_date(), None);
    }

    #[test]
    fn place_contains_ignores_case_with_accents() {
        let r = FeedbackRecord::new(1, "Amphithéâtre A", "ennui", "", "2025-03-14");
        assert!(r.place_contains("AMPHITHÉÂTRE"));
        assert!(r.place_contains("théâ"));
        assert!(!r.place_contains("theatre"));
    }
}
