use std::collections::HashMap;

use crate::classifiers::{EmojiDetector, UrlDetector};
use crate::models::{ChatRecordSet, TermCount};

/// Most frequent emoji characters, most common first.
pub fn most_common_emojis(
    records: &ChatRecordSet,
    emojis: &dyn EmojiDetector,
    limit: usize,
) -> Vec<TermCount> {
    let mut counter = TermCounter::default();
    for record in records {
        for c in record.text.chars().filter(|&c| emojis.is_emoji(c)) {
            counter.add(c.to_string());
        }
    }

    let mut ranked = counter.ranked();
    ranked.truncate(limit);
    ranked
}

/// Lowercase word counts over every non-media message: the input for a word cloud.
///
/// Tokens are split on whitespace with surrounding punctuation trimmed. Links
/// and tokens with nothing alphanumeric left are skipped.
pub fn word_frequencies(
    records: &ChatRecordSet,
    media_placeholder: &str,
    urls: &dyn UrlDetector,
) -> Vec<TermCount> {
    let mut counter = TermCounter::default();

    for record in records.iter().filter(|r| !r.is_media(media_placeholder)) {
        let links = urls.find_urls(&record.text);
        for token in record.text.split_whitespace() {
            if links.iter().any(|link| token.contains(link)) {
                continue;
            }
            let word = token.trim_matches(|c: char| !c.is_alphanumeric());
            if !word.is_empty() {
                counter.add(word.to_lowercase());
            }
        }
    }

    counter.ranked()
}

pub fn most_common_words(
    records: &ChatRecordSet,
    media_placeholder: &str,
    urls: &dyn UrlDetector,
    limit: usize,
) -> Vec<TermCount> {
    let mut words = word_frequencies(records, media_placeholder, urls);
    words.truncate(limit);
    words
}

/// Counts terms, remembering the order each was first seen.
#[derive(Default)]
struct TermCounter {
    counts: HashMap<String, (usize, usize)>,
}

impl TermCounter {
    fn add(&mut self, term: String) {
        let next_index = self.counts.len();
        self.counts.entry(term).or_insert((0, next_index)).0 += 1;
    }

    /// Descending by count, ties by first appearance.
    fn ranked(self) -> Vec<TermCount> {
        let mut entries: Vec<(String, (usize, usize))> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
        entries.into_iter().map(|(term, (count, _))| TermCount { term, count }).collect()
    }
}
