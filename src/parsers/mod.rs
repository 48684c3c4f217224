//! Transcript parsing: raw export text to [`ChatRecordSet`](crate::models::ChatRecordSet).
//!
//! The pipeline is linear and one-shot:
//!
//! 1. [`tokenizer`] splits the text into header/body pairs at message headers
//! 2. [`timestamps`] turns each header into a timestamp (day-first, several encodings)
//! 3. [`classifier`] splits each body into author and text
//! 4. [`transcript`] builds the records and derives their calendar fields
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Individual record failures**: A header whose timestamp can't be parsed drops
//!   that record only. Drops are logged at debug level and counted in [`ParseSummary`].
//!
//! - **Whole-transcript failures**: Unreadable, oversized, empty or non-UTF-8 input, and
//!   text with no message header at all, are reported as
//!   [`TranscriptError`](crate::errors::TranscriptError). No record set is produced.
//!
//! - **Suspicious input**: If more than half the headers fail to parse, a warning is
//!   logged, but the surviving records are still returned.

pub mod classifier;
pub mod timestamps;
pub mod tokenizer;
pub mod transcript;

pub use classifier::{ClassifiedBody, classify_body};
pub use timestamps::{TimestampEncoding, parse_timestamp};
pub use tokenizer::{RawMessage, tokenize};
pub use transcript::{
    ParseSummary, ParsedTranscript, build_records, decode_transcript, parse_transcript_bytes,
    parse_transcript_file,
};
