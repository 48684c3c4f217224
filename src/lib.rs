//! Chat Analyzer - Statistics and superlatives for exported chat transcripts
//!
//! This library turns the plain-text export of a group or one-to-one chat into
//! structured records and computes analytics over them. It supports:
//!
//! - Splitting a transcript into messages at `date, time - ` headers
//! - Normalizing day-first timestamps in 12-hour and 24-hour encodings
//! - Separating authored messages from system notices
//! - Filtering by author and inclusive date range
//! - Totals, timelines, weekday/hour groupings, activity heatmaps
//! - Emoji and word frequencies
//! - Per-author awards that skip configured accounts such as assistants
//!
//! # Example
//!
//! ```no_run
//! use chat_analyzer::{AnalyzerConfig, Classifiers, build_report, parse_transcript_file};
//! use std::path::Path;
//!
//! let config = AnalyzerConfig::default();
//! let parsed = parse_transcript_file(Path::new("chat.txt"), &config)?;
//! let report = build_report(&parsed.records, &config, &Classifiers::default());
//! println!("{} messages", report.basic.total_messages);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod classifiers;
pub mod cli;
pub mod config;
pub mod errors;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use analysis::build_report;
pub use classifiers::Classifiers;
pub use config::{AnalyzerConfig, SystemEventPolicy, load_config};
pub use errors::{ConfigError, FilterError, TimestampError, TranscriptError};
pub use filters::{RecordFilter, apply_filters, parse_filter};
pub use models::{ChatRecord, ChatRecordSet, ChatReport};
pub use parsers::{ParsedTranscript, parse_transcript_bytes, parse_transcript_file};
