//! URL and emoji detection used by the content aggregations.
//!
//! Aggregations take these as trait objects so callers (and tests) can plug in
//! their own detectors. The defaults are stateless and regex based.

use std::sync::{Arc, LazyLock};

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compilation cannot fail.
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("url regex")
});

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compilation cannot fail.
    Regex::new(r"^\p{Extended_Pictographic}$").expect("emoji regex")
});

/// Trailing punctuation that ends a sentence rather than a URL.
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

pub trait UrlDetector: Send + Sync {
    /// URLs found in `text`, in order of appearance.
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

pub trait EmojiDetector: Send + Sync {
    fn is_emoji(&self, c: char) -> bool;
}

/// Finds `http://`, `https://` and `www.` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexUrlDetector;

impl UrlDetector for RegexUrlDetector {
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        URL_RE
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION))
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Treats Unicode `Extended_Pictographic` characters as emoji.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiDetector;

impl EmojiDetector for UnicodeEmojiDetector {
    fn is_emoji(&self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        EMOJI_RE.is_match(c.encode_utf8(&mut buf))
    }
}

/// The detectors one analysis run uses.
#[derive(Clone)]
pub struct Classifiers {
    pub urls: Arc<dyn UrlDetector>,
    pub emojis: Arc<dyn EmojiDetector>,
}

impl Classifiers {
    pub fn new(urls: Arc<dyn UrlDetector>, emojis: Arc<dyn EmojiDetector>) -> Self {
        Self { urls, emojis }
    }
}

impl Default for Classifiers {
    fn default() -> Self {
        Self::new(Arc::new(RegexUrlDetector), Arc::new(UnicodeEmojiDetector))
    }
}

impl std::fmt::Debug for Classifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifiers").finish_non_exhaustive()
    }
}
