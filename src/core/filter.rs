use crate::errors::AppResult;
use crate::models::FeedbackRecord;
use crate::utils::date::parse_range;
use chrono::NaiveDate;

/// Match predicate of the message list.
///
/// - empty token → every record
/// - `place` contains the token (case-insensitive)
/// - `emotion` equals the token (case-sensitive)
pub fn matches(record: &FeedbackRecord, query: &str) -> bool {
    query.is_empty() || record.place_contains(query) || record.emotion.as_str() == query
}

/// Records matching `query`, in their original order.
pub fn filter(records: &[FeedbackRecord], query: &str) -> Vec<FeedbackRecord> {
    records
        .iter()
        .filter(|r| matches(r, query))
        .cloned()
        .collect()
}

/// Records dated within `[from, to]`. Records whose date does not parse are left out.
pub fn filter_by_period(
    records: &[FeedbackRecord],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<FeedbackRecord> {
    records
        .iter()
        .filter(|r| r.parsed_date().is_some_and(|d| d >= from && d <= to))
        .cloned()
        .collect()
}

/// Message-list selection: optional query token, then optional `--period`.
pub fn select(
    records: &[FeedbackRecord],
    query: Option<&str>,
    period: Option<&str>,
) -> AppResult<Vec<FeedbackRecord>> {
    let selected = filter(records, query.map(str::trim).unwrap_or(""));
    match period.map(parse_range).transpose()?.flatten() {
        Some((from, to)) => Ok(filter_by_period(&selected, from, to)),
        None => Ok(selected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FeedbackRecord> {
        vec![
            FeedbackRecord::new(1, "Salle info", "stress", "", "2025-01-10"),
            FeedbackRecord::new(2, "Parking", "calme", "", "2025-02-10"),
            FeedbackRecord::new(3, "Salle de sport", "joie", "", "pas de date"),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(filter(&sample(), ""), sample());
    }

    #[test]
    fn emotion_match_is_exact() {
        assert_eq!(filter(&sample(), "calme").len(), 1);
        assert!(filter(&sample(), "Calme").is_empty());
        assert!(filter(&sample(), "calm").is_empty());
    }

    #[test]
    fn place_match_is_substring() {
        let ids: Vec<u32> = filter(&sample(), "SALLE").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn period_drops_unparseable_dates() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let ids: Vec<u32> = filter_by_period(&sample(), from, to)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn select_trims_query_and_applies_period() {
        let ids: Vec<u32> = select(&sample(), Some("  salle "), Some("2025-01"))
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1]);

        assert_eq!(select(&sample(), None, Some("all")).unwrap().len(), 3);
        assert!(select(&sample(), None, Some("janvier")).is_err());
    }

    #[test]
    fn period_bounds_are_inclusive() {
        let day = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let out = filter_by_period(&sample(), day, day);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 2);
    }
}
