//! Superlatives over per-author aggregates.
//!
//! Only attributed records from authors outside
//! [`AnalyzerConfig::excluded_authors`] take part. Authors are tallied in order
//! of first appearance and ranked with a stable sort, so exact ties go to
//! whoever appeared first in the transcript. A value of zero never wins a
//! "most" award; an empty population yields `None`.

use std::collections::{HashMap, HashSet};

use crate::classifiers::UrlDetector;
use crate::config::AnalyzerConfig;
use crate::models::{Award, AwardValue, Awards, ChatRecord, ChatRecordSet};

/// Hours counted for the early-bird award.
const EARLY_HOURS: std::ops::RangeInclusive<u32> = 5..=8;
/// Hours counted for the night-owl award; the window wraps midnight.
const NIGHT_HOURS: [u32; 5] = [22, 23, 0, 1, 2];
/// Messages before this hour never start a day's conversation.
const CONVERSATION_START_HOUR: u32 = 6;

pub fn is_early_hour(hour: u32) -> bool {
    EARLY_HOURS.contains(&hour)
}

pub fn is_night_hour(hour: u32) -> bool {
    NIGHT_HOURS.contains(&hour)
}

/// Per-author sums in first-appearance order.
struct Tally<'a> {
    order: Vec<&'a str>,
    totals: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    fn new() -> Self {
        Self { order: Vec::new(), totals: HashMap::new() }
    }

    fn add(&mut self, author: &'a str, amount: usize) {
        let order = &mut self.order;
        *self.totals.entry(author).or_insert_with(|| {
            order.push(author);
            0
        }) += amount;
    }

    fn into_values(self) -> Vec<(&'a str, usize)> {
        let totals = self.totals;
        self.order.into_iter().map(|author| (author, totals[author])).collect()
    }
}

/// Eligible records paired with their author.
fn eligible<'a>(
    records: &'a ChatRecordSet,
    config: &'a AnalyzerConfig,
) -> impl Iterator<Item = (&'a str, &'a ChatRecord)> + 'a {
    records.iter().filter_map(move |record| {
        let author = record.author.as_deref()?;
        (!config.is_excluded(author)).then_some((author, record))
    })
}

fn tally_by<'a, F>(
    records: &'a ChatRecordSet,
    config: &'a AnalyzerConfig,
    amount: F,
) -> Vec<(&'a str, usize)>
where
    F: Fn(&ChatRecord) -> usize,
{
    let mut tally = Tally::new();
    for (author, record) in eligible(records, config) {
        tally.add(author, amount(record));
    }
    tally.into_values()
}

fn count_award(author: &str, value: usize) -> Award {
    Award { author: author.to_string(), value: AwardValue::Count(value) }
}

fn argmax(mut values: Vec<(&str, usize)>) -> Option<Award> {
    values.sort_by(|a, b| b.1.cmp(&a.1));
    values
        .into_iter()
        .next()
        .filter(|(_, value)| *value > 0)
        .map(|(author, value)| count_award(author, value))
}

fn argmin(mut values: Vec<(&str, usize)>) -> Option<Award> {
    values.sort_by(|a, b| a.1.cmp(&b.1));
    values
        .into_iter()
        .next()
        .map(|(author, value)| count_award(author, value))
}

pub fn most_messages(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmax(tally_by(records, config, |_| 1))
}

pub fn least_messages(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmin(tally_by(records, config, |_| 1))
}

/// Most words written, media placeholders excluded.
pub fn most_words(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmax(tally_by(records, config, |r| {
        if r.is_media(&config.media_placeholder) { 0 } else { r.word_count }
    }))
}

/// Highest mean words per non-media message.
pub fn longest_messages(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (usize, usize)> = HashMap::new();

    for (author, record) in eligible(records, config) {
        if record.is_media(&config.media_placeholder) {
            continue;
        }
        let entry = sums.entry(author).or_insert_with(|| {
            order.push(author);
            (0, 0)
        });
        entry.0 += record.word_count;
        entry.1 += 1;
    }

    let mut means: Vec<(&str, f64)> = order
        .into_iter()
        .map(|author| {
            let (words, messages) = sums[author];
            (author, words as f64 / messages as f64)
        })
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));

    means
        .into_iter()
        .next()
        .filter(|(_, mean)| *mean > 0.0)
        .map(|(author, mean)| Award { author: author.to_string(), value: AwardValue::Mean(mean) })
}

pub fn most_media(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmax(tally_by(records, config, |r| usize::from(r.is_media(&config.media_placeholder))))
}

pub fn most_links(
    records: &ChatRecordSet,
    config: &AnalyzerConfig,
    urls: &dyn UrlDetector,
) -> Option<Award> {
    argmax(tally_by(records, config, |r| urls.find_urls(&r.text).len()))
}

/// Most messages sent between 05:00 and 08:59.
pub fn early_bird(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmax(tally_by(records, config, |r| usize::from(is_early_hour(r.hour))))
}

/// Most messages sent between 22:00 and 02:59.
pub fn night_owl(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    argmax(tally_by(records, config, |r| usize::from(is_night_hour(r.hour))))
}

/// Most days on which the author sent the first message at or after 06:00.
pub fn conversation_starter(records: &ChatRecordSet, config: &AnalyzerConfig) -> Option<Award> {
    let mut started_days = HashSet::new();
    let mut tally = Tally::new();

    for (author, record) in eligible(records, config) {
        if record.hour >= CONVERSATION_START_HOUR && started_days.insert(record.date) {
            tally.add(author, 1);
        }
    }

    argmax(tally.into_values())
}

/// Every award for `records`.
pub fn compute_awards(
    records: &ChatRecordSet,
    config: &AnalyzerConfig,
    urls: &dyn UrlDetector,
) -> Awards {
    Awards {
        most_messages: most_messages(records, config),
        least_messages: least_messages(records, config),
        most_words: most_words(records, config),
        longest_messages: longest_messages(records, config),
        most_media: most_media(records, config),
        most_links: most_links(records, config, urls),
        early_bird: early_bird(records, config),
        night_owl: night_owl(records, config),
        conversation_starter: conversation_starter(records, config),
    }
}
