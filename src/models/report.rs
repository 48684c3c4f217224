use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    pub total_messages: usize,
    pub media_messages: usize,
    /// Word total with the media placeholder's own tokens removed.
    pub total_words: usize,
    pub links: usize,
}

/// One author's share of the attributed messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub author: String,
    pub messages: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    /// `"January-2024"`
    pub label: String,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: String,
    pub messages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub bucket: String,
    pub messages: usize,
}

/// Weekday x hour-bucket message counts. Rows follow `weekdays`, columns follow `buckets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub weekdays: Vec<String>,
    pub buckets: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivitySpan {
    pub first_message: NaiveDateTime,
    pub last_message: NaiveDateTime,
    pub active_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AwardValue {
    Count(usize),
    Mean(f64),
}

impl AwardValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            AwardValue::Count(n) => n as f64,
            AwardValue::Mean(m) => m,
        }
    }
}

impl std::fmt::Display for AwardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwardValue::Count(n) => write!(f, "{}", n),
            AwardValue::Mean(m) => write!(f, "{:.2}", m),
        }
    }
}

/// Winner of a superlative and the aggregate that won it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub author: String,
    pub value: AwardValue,
}

/// Every superlative for one record set. `None` means nobody was eligible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Awards {
    pub most_messages: Option<Award>,
    pub least_messages: Option<Award>,
    pub most_words: Option<Award>,
    pub longest_messages: Option<Award>,
    pub most_media: Option<Award>,
    pub most_links: Option<Award>,
    pub early_bird: Option<Award>,
    pub night_owl: Option<Award>,
    pub conversation_starter: Option<Award>,
}

impl Awards {
    /// `(title, award)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, Option<&Award>); 9] {
        [
            ("Most messages", self.most_messages.as_ref()),
            ("Fewest messages", self.least_messages.as_ref()),
            ("Most words", self.most_words.as_ref()),
            ("Longest messages", self.longest_messages.as_ref()),
            ("Most media", self.most_media.as_ref()),
            ("Most links", self.most_links.as_ref()),
            ("Early bird", self.early_bird.as_ref()),
            ("Night owl", self.night_owl.as_ref()),
            ("Conversation starter", self.conversation_starter.as_ref()),
        ]
    }
}

/// All aggregations for one (optionally filtered) record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub basic: BasicStats,
    pub span: Option<ActivitySpan>,
    pub busy_users: Vec<UserShare>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub weekly_activity: Vec<WeekdayCount>,
    pub month_activity: Vec<MonthCount>,
    pub hourly_activity: Vec<HourCount>,
    pub heatmap: ActivityHeatmap,
    pub top_emojis: Vec<TermCount>,
    pub top_words: Vec<TermCount>,
    pub awards: Awards,
}
