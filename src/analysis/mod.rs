//! Aggregations over a [`ChatRecordSet`](crate::models::ChatRecordSet).
//!
//! Every function here is pure: it reads a record set (already filtered by the
//! caller) and returns plain data from [`crate::models::report`]. An empty set
//! always produces an empty or zero-filled result, never an error.
//!
//! - [`basic`]: totals, per-author shares, activity span
//! - [`timeline`]: monthly/daily timelines, weekday/month/hour groupings, heatmap
//! - [`content`]: emoji and word frequencies
//! - [`awards`]: superlatives over eligible authors
//! - [`report`]: everything at once, in parallel

pub mod awards;
pub mod basic;
pub mod content;
pub mod report;
pub mod timeline;

pub use awards::{
    compute_awards, conversation_starter, early_bird, is_early_hour, is_night_hour,
    least_messages, longest_messages, most_links, most_media, most_messages, most_words,
    night_owl,
};
pub use basic::{activity_span, basic_stats, busy_users};
pub use content::{most_common_emojis, most_common_words, word_frequencies};
pub use report::build_report;
pub use timeline::{
    activity_heatmap, daily_timeline, hourly_activity, month_activity, monthly_timeline,
    weekly_activity,
};
