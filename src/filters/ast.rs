use chrono::NaiveDate;

/// Which author's records to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorChoice {
    /// Identity filter
    #[default]
    All,
    Only(String),
}

impl AuthorChoice {
    /// Exactly `"all"` selects everyone; anything else names one author.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            AuthorChoice::All
        } else {
            AuthorChoice::Only(value.to_string())
        }
    }

    pub fn matches(&self, author: Option<&str>) -> bool {
        match self {
            AuthorChoice::All => true,
            AuthorChoice::Only(choice) => author == Some(choice.as_str()),
        }
    }
}

/// Date range plus author selection. Both date bounds are inclusive; a missing
/// bound leaves that side open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub author: AuthorChoice,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, since: NaiveDate, until: NaiveDate) -> Self {
        self.since = Some(since);
        self.until = Some(until);
        self
    }

    pub fn author(mut self, author: AuthorChoice) -> Self {
        self.author = author;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.since.is_none() && self.until.is_none() && self.author == AuthorChoice::All
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.since.is_none_or(|since| date >= since) && self.until.is_none_or(|until| date <= until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_author_choice_parse() {
        assert_eq!(AuthorChoice::parse("all"), AuthorChoice::All);
        assert_eq!(AuthorChoice::parse("ALL"), AuthorChoice::Only("ALL".to_string()));
        assert_eq!(AuthorChoice::parse("All"), AuthorChoice::Only("All".to_string()));
        assert_eq!(AuthorChoice::parse("Alice"), AuthorChoice::Only("Alice".to_string()));
    }

    #[test]
    fn test_author_choice_matches() {
        assert!(AuthorChoice::All.matches(None));
        assert!(AuthorChoice::All.matches(Some("Bob")));

        let alice = AuthorChoice::Only("Alice".to_string());
        assert!(alice.matches(Some("Alice")));
        assert!(!alice.matches(Some("alice")));
        assert!(!alice.matches(None));
    }

    #[test]
    fn test_record_filter_empty() {
        assert!(RecordFilter::new().is_empty());
        assert!(!RecordFilter::new().author(AuthorChoice::parse("Bob")).is_empty());
    }

    #[test]
    fn test_contains_date_inclusive() {
        let filter = RecordFilter::new().date_range(date(2024, 1, 1), date(2024, 1, 31));
        assert!(filter.contains_date(date(2024, 1, 1)));
        assert!(filter.contains_date(date(2024, 1, 31)));
        assert!(!filter.contains_date(date(2023, 12, 31)));
        assert!(!filter.contains_date(date(2024, 2, 1)));
    }

    #[test]
    fn test_contains_date_open_ended() {
        let filter = RecordFilter { since: Some(date(2024, 1, 1)), ..Default::default() };
        assert!(filter.contains_date(date(2030, 1, 1)));
        assert!(!filter.contains_date(date(2023, 1, 1)));
    }
}
