//! Analyzer configuration.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "excluded_authors": ["Meta AI", "Reminder Bot"], "system_events": "drop" }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::utils::environment::{config_path_from_env, default_config_path};

pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";
pub const DEFAULT_EXCLUDED_AUTHOR: &str = "Meta AI";

/// What the record builder does with lines that have no sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemEventPolicy {
    /// Keep them with `author == None`.
    #[default]
    Retain,
    /// Remove them from the record set.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Exact text exports leave in place of stripped media.
    pub media_placeholder: String,
    /// Authors never eligible for an award (automated assistants, bots).
    pub excluded_authors: BTreeSet<String>,
    pub system_events: SystemEventPolicy,
    pub top_emojis: usize,
    pub top_words: usize,
    pub max_file_size_mb: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            excluded_authors: BTreeSet::from([DEFAULT_EXCLUDED_AUTHOR.to_string()]),
            system_events: SystemEventPolicy::Retain,
            top_emojis: 10,
            top_words: 20,
            max_file_size_mb: 64,
        }
    }
}

impl AnalyzerConfig {
    /// Read a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn is_excluded(&self, author: &str) -> bool {
        self.excluded_authors.contains(author)
    }
}

/// Resolve and load the configuration.
///
/// Lookup order: `explicit` path, then `$CHAT_ANALYZER_CONFIG`, then the per-user
/// config file, then built-in defaults. The first two must exist when given.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalyzerConfig> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config from --config");
        return Ok(AnalyzerConfig::from_file(path)?);
    }

    if let Some(path) = config_path_from_env() {
        if !path.is_file() {
            bail!("Config file named by environment does not exist: {}", path.display());
        }
        tracing::debug!(path = %path.display(), "loading config from environment");
        return AnalyzerConfig::from_file(&path)
            .context("Failed to load config named by environment");
    }

    if let Some(path) = default_config_path().filter(|p| p.is_file()) {
        tracing::debug!(path = %path.display(), "loading user config");
        return Ok(AnalyzerConfig::from_file(&path)?);
    }

    tracing::debug!("no config file found, using defaults");
    Ok(AnalyzerConfig::default())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write config");
        file.flush().expect("Failed to flush config");
        file
    }

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert!(config.is_excluded("Meta AI"));
        assert!(!config.is_excluded("Alice"));
        assert_eq!(config.system_events, SystemEventPolicy::Retain);
        assert_eq!(config.top_emojis, 10);
        assert_eq!(config.max_file_size_bytes(), 64 * 1024 * 1024);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let file = write_config(r#"{"system_events": "drop", "excluded_authors": ["Bot"]}"#);
        let config = AnalyzerConfig::from_file(file.path()).unwrap();

        assert_eq!(config.system_events, SystemEventPolicy::Drop);
        assert!(config.is_excluded("Bot"));
        assert!(!config.is_excluded("Meta AI"));
        assert_eq!(config.media_placeholder, "<Media omitted>");
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let file = write_config(r#"{"media_placeholer": "typo"}"#);
        let err = AnalyzerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_config_missing_file() {
        let err =
            AnalyzerConfig::from_file(Path::new("/nonexistent/chat-analyzer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let file = write_config(r#"{"top_words": 5}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.top_words, 5);
    }
}
