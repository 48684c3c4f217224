//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for exported chat transcripts written to a temp directory
pub struct TranscriptBuilder {
    lines: Vec<String>,
}

impl TranscriptBuilder {
    /// Create a builder with no lines
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an authored message; `header` is the `date, time` part, e.g. `"1/1/24, 09:00"`
    pub fn message(mut self, header: &str, author: &str, text: &str) -> Self {
        self.lines.push(format!("{} - {}: {}", header, author, text));
        self
    }

    /// Add a system notice (no author)
    pub fn system(mut self, header: &str, text: &str) -> Self {
        self.lines.push(format!("{} - {}", header, text));
        self
    }

    /// Add a raw line verbatim (continuations, preambles, garbage)
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// The transcript text
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Write the transcript to `chat.txt` in a fresh temp directory
    pub fn build(self) -> TestTranscript {
        let content = self.content();
        TestTranscript::from_bytes(content.as_bytes())
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A transcript file that lives as long as this value
pub struct TestTranscript {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestTranscript {
    /// Write arbitrary bytes (for encoding and size tests)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("chat.txt");
        fs::write(&path, bytes).expect("Failed to write transcript");
        Self { temp_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a config file next to the transcript and return its path
    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.temp_dir.path().join("config.json");
        fs::write(&path, json).expect("Failed to write config");
        path
    }
}

/// A small three-day group chat exercising every record shape:
///
/// - 11 records: 10 authored (Alice 3, Bob 3, Meta AI 2, Carol 2) and 1 system notice
/// - 1 media placeholder (Bob), 1 link (Bob)
/// - Tuesday 12, Wednesday 13 and Thursday 14 March 2024
/// - a multi-line message and an export preamble
pub fn realistic_transcript() -> TranscriptBuilder {
    TranscriptBuilder::new()
        .raw("Messages and calls are end-to-end encrypted. No one outside of this chat can read them.")
        .message("12/03/24, 07:15", "Alice", "Good morning everyone")
        .message("12/03/24, 07:20", "Bob", "morning! https://example.com/news")
        .message("12/03/24, 08:02", "Meta AI", "Here is a summary of the news")
        .system("12/03/24, 09:30", "Carol joined using this group's invite link")
        .message("12/03/24, 13:45", "Carol", "hey all 😀")
        .message("12/03/24, 13:46", "Bob", "<Media omitted>")
        .message("13/03/24, 23:10", "Alice", "can't sleep 😴")
        .message("14/03/24, 00:30", "Alice", "still up")
        .message("14/03/24, 01:05", "Bob", "go to bed")
        .message("14/03/24, 10:00", "Meta AI", "Reminder: drink water")
        .message("14/03/24, 10:01", "Carol", "multi-line message")
        .raw("second line")
}
