use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{
    ActivityHeatmap, ChatRecordSet, DailyCount, HOUR_BUCKETS, HourCount, MONTH_NAMES, MonthCount,
    MonthlyCount, WEEKDAY_NAMES, WeekdayCount,
};

/// Messages per calendar month, oldest first.
pub fn monthly_timeline(records: &ChatRecordSet) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *counts.entry((record.year, record.month_number)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((year, month_number), messages)| {
            let month_name = MONTH_NAMES[month_number as usize - 1].to_string();
            MonthlyCount {
                year,
                month_number,
                label: format!("{}-{}", month_name, year),
                month_name,
                messages,
            }
        })
        .collect()
}

/// Messages per day with activity, oldest first.
pub fn daily_timeline(records: &ChatRecordSet) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_default() += 1;
    }

    counts.into_iter().map(|(date, messages)| DailyCount { date, messages }).collect()
}

/// Messages per weekday, Monday to Sunday. Weekdays without messages are omitted.
pub fn weekly_activity(records: &ChatRecordSet) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for record in records {
        counts[record.weekday_index()] += 1;
    }

    WEEKDAY_NAMES
        .iter()
        .zip(counts)
        .filter(|(_, messages)| *messages > 0)
        .map(|(weekday, messages)| WeekdayCount { weekday: weekday.to_string(), messages })
        .collect()
}

/// Messages per month name across all years, January to December. Months
/// without messages are omitted.
pub fn month_activity(records: &ChatRecordSet) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for record in records {
        counts[record.month_number as usize - 1] += 1;
    }

    MONTH_NAMES
        .iter()
        .zip(counts)
        .filter(|(_, messages)| *messages > 0)
        .map(|(month, messages)| MonthCount { month: month.to_string(), messages })
        .collect()
}

/// Messages per hour bucket, all 24 buckets in hour order.
pub fn hourly_activity(records: &ChatRecordSet) -> Vec<HourCount> {
    let mut counts = [0usize; 24];
    for record in records {
        counts[record.hour as usize] += 1;
    }

    HOUR_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, messages)| HourCount { bucket: bucket.to_string(), messages })
        .collect()
}

/// Weekday x hour-bucket counts, zero-filled.
pub fn activity_heatmap(records: &ChatRecordSet) -> ActivityHeatmap {
    let mut counts = vec![vec![0usize; HOUR_BUCKETS.len()]; WEEKDAY_NAMES.len()];
    for record in records {
        counts[record.weekday_index()][record.hour as usize] += 1;
    }

    ActivityHeatmap {
        weekdays: WEEKDAY_NAMES.iter().map(|s| s.to_string()).collect(),
        buckets: HOUR_BUCKETS.iter().map(|s| s.to_string()).collect(),
        counts,
    }
}
