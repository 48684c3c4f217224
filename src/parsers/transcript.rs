use std::path::Path;

use crate::config::{AnalyzerConfig, SystemEventPolicy};
use crate::errors::TranscriptError;
use crate::models::{ChatRecord, ChatRecordSet};
use crate::parsers::classifier::classify_body;
use crate::parsers::timestamps::parse_timestamp;
use crate::parsers::tokenizer::tokenize;
use crate::utils::read_transcript_bytes;

const UTF8_BOM: char = '\u{FEFF}';

/// Counts describing how a transcript was turned into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Message headers found by the tokenizer.
    pub boundaries: usize,
    pub kept: usize,
    pub unparseable_timestamps: usize,
    /// System notices removed under [`SystemEventPolicy::Drop`].
    pub dropped_system_events: usize,
}

impl ParseSummary {
    pub fn dropped(&self) -> usize {
        self.unparseable_timestamps + self.dropped_system_events
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub records: ChatRecordSet,
    pub summary: ParseSummary,
}

/// Decode raw upload bytes as UTF-8, stripping a leading byte-order mark.
pub fn decode_transcript(bytes: &[u8]) -> Result<&str, TranscriptError> {
    if bytes.is_empty() {
        return Err(TranscriptError::Empty);
    }

    let content = std::str::from_utf8(bytes)
        .map_err(|e| TranscriptError::InvalidEncoding { offset: e.valid_up_to() })?;

    Ok(content.strip_prefix(UTF8_BOM).unwrap_or(content))
}

/// Build the record set for a decoded transcript.
///
/// Records whose header has an unparseable timestamp are dropped, as are system
/// notices when `policy` is [`SystemEventPolicy::Drop`]. Surviving records keep
/// their source order.
///
/// # Errors
///
/// Returns [`TranscriptError::NoMessageBoundaries`] if the text contains no
/// message header at all. A transcript whose every record is dropped is not an
/// error: it yields an empty record set.
pub fn build_records(
    content: &str,
    policy: SystemEventPolicy,
) -> Result<ParsedTranscript, TranscriptError> {
    let raw_messages = tokenize(content);
    if raw_messages.is_empty() {
        return Err(TranscriptError::NoMessageBoundaries);
    }

    let mut summary = ParseSummary { boundaries: raw_messages.len(), ..Default::default() };
    let mut records = Vec::with_capacity(raw_messages.len());

    for raw in raw_messages {
        let timestamp = match parse_timestamp(raw.header) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                tracing::debug!(offset = raw.offset, "dropping record: {}", e);
                summary.unparseable_timestamps += 1;
                continue;
            }
        };

        let body = classify_body(raw.body);
        if body.author.is_none() && policy == SystemEventPolicy::Drop {
            tracing::debug!(offset = raw.offset, "dropping system event");
            summary.dropped_system_events += 1;
            continue;
        }

        records.push(ChatRecord::new(body.author, body.text, timestamp));
    }

    summary.kept = records.len();

    if summary.unparseable_timestamps * 2 > summary.boundaries {
        tracing::warn!(
            "{} of {} message headers had unparseable timestamps; the export may use an unsupported date format",
            summary.unparseable_timestamps,
            summary.boundaries
        );
    }

    Ok(ParsedTranscript { records: ChatRecordSet::new(records), summary })
}

/// Decode and parse a transcript held in memory.
pub fn parse_transcript_bytes(
    bytes: &[u8],
    policy: SystemEventPolicy,
) -> Result<ParsedTranscript, TranscriptError> {
    build_records(decode_transcript(bytes)?, policy)
}

/// Read, decode and parse a transcript file using `config`'s size limit and
/// system-event policy.
pub fn parse_transcript_file(
    path: &Path,
    config: &AnalyzerConfig,
) -> Result<ParsedTranscript, TranscriptError> {
    let bytes = read_transcript_bytes(path, config.max_file_size_bytes())?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read transcript");

    let parsed = parse_transcript_bytes(&bytes, config.system_events)?;
    tracing::info!(
        kept = parsed.summary.kept,
        dropped = parsed.summary.dropped(),
        "built chat records"
    );

    Ok(parsed)
}
