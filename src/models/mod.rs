//! Data models for parsed chat transcripts and the analytics derived from them.
//!
//! - [`ChatRecord`] - One message or system notice with derived calendar fields
//! - [`ChatRecordSet`] - Ordered records of a single transcript
//! - [`ChatReport`] and friends - Aggregation results ready for display or JSON output

pub mod record;
pub mod report;

pub use record::{ChatRecord, ChatRecordSet, HOUR_BUCKETS, MONTH_NAMES, WEEKDAY_NAMES, hour_bucket};
pub use report::{
    ActivityHeatmap, ActivitySpan, Award, AwardValue, Awards, BasicStats, ChatReport, DailyCount,
    HourCount, MonthCount, MonthlyCount, TermCount, UserShare, WeekdayCount,
};
