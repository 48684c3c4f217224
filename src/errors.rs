//! Error types surfaced by the transcript pipeline.
//!
//! Only [`TranscriptError`] ever reaches a caller of [`crate::parse_transcript_file`]:
//! per-record failures ([`TimestampError`]) are absorbed by the record builder,
//! which drops the offending record and moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Whole-transcript failures. The session produces no record set.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to read transcript {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transcript is too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("transcript is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    #[error("transcript is empty")]
    Empty,

    #[error("no message headers found; is this a chat export?")]
    NoMessageBoundaries,
}

/// A message header whose date/time matched no supported encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("unparseable timestamp: {0:?}")]
    Unparseable(String),
}

/// Invalid filter expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid filter term '{0}' (expected field:value)")]
    InvalidTerm(String),

    #[error("unknown filter field '{0}' (expected user, from or to)")]
    UnknownField(String),

    #[error("empty value for filter field '{0}'")]
    EmptyValue(String),

    #[error("filter field '{0}' given more than once")]
    DuplicateField(String),

    #[error("unterminated quoted value for filter field '{0}'")]
    UnterminatedQuote(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("date range is empty: from {from} is after to {to}")]
    EmptyRange { from: String, to: String },
}

/// Unreadable or malformed configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
