use chrono::NaiveDate;

use super::ast::{AuthorChoice, RecordFilter};
use crate::models::ChatRecordSet;

/// Records dated within `[min_date, max_date]`, in their original order.
pub fn filter_by_date_range(
    records: &ChatRecordSet,
    min_date: NaiveDate,
    max_date: NaiveDate,
) -> ChatRecordSet {
    records.retain_where(|r| r.date >= min_date && r.date <= max_date)
}

/// Records sent by `choice`; [`AuthorChoice::All`] keeps everything.
pub fn filter_by_author(records: &ChatRecordSet, choice: &AuthorChoice) -> ChatRecordSet {
    match choice {
        AuthorChoice::All => records.clone(),
        _ => records.retain_where(|r| choice.matches(r.author.as_deref())),
    }
}

/// Apply the date range, then the author choice.
pub fn apply_filters(records: &ChatRecordSet, filter: &RecordFilter) -> ChatRecordSet {
    if filter.is_empty() {
        return records.clone();
    }

    records.retain_where(|r| {
        filter.contains_date(r.date) && filter.author.matches(r.author.as_deref())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::models::ChatRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_record(author: Option<&str>, day: u32) -> ChatRecord {
        let timestamp: NaiveDateTime = date(2024, 1, day).and_hms_opt(12, 0, 0).unwrap();
        ChatRecord::new(author.map(String::from), format!("message {}", day), timestamp)
    }

    fn sample() -> ChatRecordSet {
        ChatRecordSet::new(vec![
            create_test_record(Some("Alice"), 1),
            create_test_record(Some("Bob"), 2),
            create_test_record(None, 3),
            create_test_record(Some("Alice"), 4),
            create_test_record(Some("Bob"), 5),
        ])
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        let result = filter_by_date_range(&sample(), date(2024, 1, 2), date(2024, 1, 4));
        let days: Vec<u32> = result.iter().map(|r| r.day_of_month).collect();
        assert_eq!(days, vec![2, 3, 4]);
    }

    #[test]
    fn test_filter_by_date_range_empty_window() {
        let result = filter_by_date_range(&sample(), date(2024, 2, 1), date(2024, 2, 28));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_by_author() {
        let result = filter_by_author(&sample(), &AuthorChoice::Only("Alice".to_string()));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.author.as_deref() == Some("Alice")));
    }

    #[test]
    fn test_filter_by_author_all_is_identity() {
        let records = sample();
        assert_eq!(filter_by_author(&records, &AuthorChoice::All), records);
    }

    #[test]
    fn test_apply_filters_empty() {
        let records = sample();
        assert_eq!(apply_filters(&records, &RecordFilter::new()), records);
    }

    #[test]
    fn test_apply_filters_combined() {
        let filter = RecordFilter::new()
            .date_range(date(2024, 1, 2), date(2024, 1, 5))
            .author(AuthorChoice::Only("Bob".to_string()));

        let result = apply_filters(&sample(), &filter);
        let days: Vec<u32> = result.iter().map(|r| r.day_of_month).collect();
        assert_eq!(days, vec![2, 5]);
    }
}
