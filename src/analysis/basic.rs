use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::classifiers::UrlDetector;
use crate::models::{ActivitySpan, BasicStats, ChatRecordSet, UserShare};

/// Message, media, word and link totals.
///
/// The word total leaves out the media placeholder's own tokens: a
/// `"<Media omitted>"` message contributes zero words, not two.
pub fn basic_stats(
    records: &ChatRecordSet,
    media_placeholder: &str,
    urls: &dyn UrlDetector,
) -> BasicStats {
    let placeholder_words = media_placeholder.split_whitespace().count();

    let mut stats = BasicStats { total_messages: records.len(), ..Default::default() };
    let mut raw_words = 0;

    for record in records {
        raw_words += record.word_count;
        if record.is_media(media_placeholder) {
            stats.media_messages += 1;
        }
        stats.links += urls.find_urls(&record.text).len();
    }

    stats.total_words = raw_words.saturating_sub(stats.media_messages * placeholder_words);
    stats
}

/// Per-author message counts and share of all attributed messages.
///
/// Sorted by count, most active first; equal counts keep first-appearance order.
/// Percentages are rounded to two decimals. System notices are not counted.
pub fn busy_users(records: &ChatRecordSet) -> Vec<UserShare> {
    let counts = count_by_author(records);
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    counts
        .into_iter()
        .map(|(author, messages)| UserShare {
            author: author.to_string(),
            messages,
            percent: round2(messages as f64 * 100.0 / total as f64),
        })
        .collect()
}

/// First and last message, and the number of distinct days with messages.
pub fn activity_span(records: &ChatRecordSet) -> Option<ActivitySpan> {
    let first = records.records().first()?;
    let last = records.records().last()?;

    let dates: HashSet<NaiveDate> = records.iter().map(|r| r.date).collect();

    Some(ActivitySpan {
        first_message: first.timestamp,
        last_message: last.timestamp,
        active_days: dates.len(),
    })
}

/// Attributed message counts, descending, ties in first-appearance order.
pub(crate) fn count_by_author(records: &ChatRecordSet) -> Vec<(&str, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for author in records.iter().filter_map(|r| r.author.as_deref()) {
        let count = counts.entry(author).or_insert_with(|| {
            order.push(author);
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|a| (a, counts[a])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
