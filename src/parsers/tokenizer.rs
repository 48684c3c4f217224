use std::sync::LazyLock;

use regex::Regex;

/// Message header at the start of a line: `D/M/YY, H:MM - ` with an optional
/// `am`/`pm` suffix. Exports separate the parts with ordinary, non-breaking
/// (U+00A0) or narrow non-breaking (U+202F) spaces depending on platform.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; compilation cannot fail.
    Regex::new(
        r"(?im)^\d{1,2}/\d{1,2}/\d{2,4},[ \x{00A0}\x{202F}]\d{1,2}:\d{2}(?:[ \x{00A0}\x{202F}]?[ap]m)?[ \x{00A0}\x{202F}]-[ \x{00A0}\x{202F}]",
    )
    .expect("message header regex")
});

/// A message header and the raw text that follows it, up to the next header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage<'a> {
    /// Matched header, including the trailing `" - "`.
    pub header: &'a str,
    /// Byte offset of the header within the transcript.
    pub offset: usize,
    /// Everything after the header; may span several lines.
    pub body: &'a str,
}

/// Split a transcript into header/body pairs in source order.
///
/// Text before the first header is export preamble and is discarded.
pub fn tokenize(content: &str) -> Vec<RawMessage<'_>> {
    let headers: Vec<_> = HEADER_RE.find_iter(content).collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let body_end = headers.get(i + 1).map_or(content.len(), |next| next.start());
            RawMessage {
                header: header.as_str(),
                offset: header.start(),
                body: &content[header.end()..body_end],
            }
        })
        .collect()
}
