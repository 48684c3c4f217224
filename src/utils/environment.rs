use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHAT_ANALYZER_CONFIG";

/// Config file named by `$CHAT_ANALYZER_CONFIG`, if set and non-empty
pub fn config_path_from_env() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Per-user config file (`~/.config/chat-analyzer/config.json` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chat-analyzer").join("config.json"))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_config_path_from_env() {
        // Save original value
        let original = env::var_os(CONFIG_ENV_VAR);

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. No other test reads this variable concurrently
        // 2. We restore the original value afterwards
        unsafe {
            env::set_var(CONFIG_ENV_VAR, "/tmp/analyzer.json");
        }
        assert_eq!(config_path_from_env(), Some(PathBuf::from("/tmp/analyzer.json")));

        unsafe {
            env::set_var(CONFIG_ENV_VAR, "");
        }
        assert_eq!(config_path_from_env(), None);

        // Restore original value
        unsafe {
            match original {
                Some(value) => env::set_var(CONFIG_ENV_VAR, value),
                None => env::remove_var(CONFIG_ENV_VAR),
            }
        }
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("chat-analyzer/config.json"));
        }
    }
}
