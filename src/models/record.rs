use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Hour-window labels in hour order; index `h` is the window containing hour `h`.
pub const HOUR_BUCKETS: [&str; 24] = [
    "00-1", "1-2", "2-3", "3-4", "4-5", "5-6", "6-7", "7-8", "8-9", "9-10", "10-11", "11-12",
    "12-13", "13-14", "14-15", "15-16", "16-17", "17-18", "18-19", "19-20", "20-21", "21-22",
    "22-23", "23-00",
];

pub const WEEKDAY_NAMES: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label of the hour-long window containing `hour`.
///
/// Midnight and the last hour of the day use the wraparound labels `"00-1"` and `"23-00"`.
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// One message (or system notice) from a transcript, with its calendar fields
/// derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRecord {
    /// Sender name. `None` for system notices such as "Alice joined".
    pub author: Option<String>,
    pub text: String,
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    pub day_of_month: u32,
    pub weekday_name: String,
    pub hour: u32,
    pub minute: u32,
    pub hour_bucket: String,
    pub word_count: usize,
}

impl ChatRecord {
    pub fn new(author: Option<String>, text: String, timestamp: NaiveDateTime) -> Self {
        let hour = timestamp.hour();
        let word_count = text.split_whitespace().count();

        Self {
            author,
            date: timestamp.date(),
            year: timestamp.year(),
            month_number: timestamp.month(),
            month_name: timestamp.format("%B").to_string(),
            day_of_month: timestamp.day(),
            weekday_name: timestamp.format("%A").to_string(),
            hour,
            minute: timestamp.minute(),
            hour_bucket: hour_bucket(hour),
            word_count,
            text,
            timestamp,
        }
    }

    pub fn is_system_event(&self) -> bool {
        self.author.is_none()
    }

    /// True when the exported text is the placeholder left behind for stripped media.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.text == placeholder
    }

    /// Monday = 0 .. Sunday = 6
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_monday() as usize
    }
}

/// Ordered records of one transcript, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatRecordSet {
    records: Vec<ChatRecord>,
}

impl ChatRecordSet {
    pub fn new(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.records.iter()
    }

    /// Distinct authors in order of first appearance. System notices are skipped.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for author in self.records.iter().filter_map(|r| r.author.as_deref()) {
            if !seen.contains(&author) {
                seen.push(author);
            }
        }
        seen
    }

    /// Keep the records matching `predicate`, preserving order.
    pub fn retain_where<F>(&self, predicate: F) -> Self
    where
        F: Fn(&ChatRecord) -> bool,
    {
        Self { records: self.records.iter().filter(|r| predicate(r)).cloned().collect() }
    }

    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ChatRecordSet {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
