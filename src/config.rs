//! Configuration file parser for ~/.config/cityguide/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are accepted by serde, though we log a warning when the
//! file contains potential typos.
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::domain::mock::DEFAULT_CITY;
use crate::views::comments::DEFAULT_PER_PAGE;
use crate::views::Section;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// City selected at startup.
    pub default_city: String,

    /// Base URL of a JSON catalog. When unset the built-in data is used.
    pub data_url: Option<String>,

    /// Simulated latency of the built-in data source, in milliseconds.
    pub simulated_delay_ms: u64,

    /// Comments per page on the community article.
    pub comments_per_page: usize,

    /// Section id shown at startup ("housing", "navigator", "shops",
    /// "subscription" or "community"). Unknown ids open housing.
    pub start_section: String,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            default_city: DEFAULT_CITY.to_string(),
            data_url: None,
            simulated_delay_ms: 1000,
            comments_per_page: DEFAULT_PER_PAGE,
            start_section: Section::default().id().to_string(),
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 7] = [
        "theme",
        "default_city",
        "data_url",
        "simulated_delay_ms",
        "comments_per_page",
        "start_section",
        "keybindings",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // Check size before reading so a huge file is never pulled into memory
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            theme = %config.theme,
            city = %config.default_city,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Comments per page, never zero.
    pub fn page_size(&self) -> usize {
        self.comments_per_page.max(1)
    }

    pub fn initial_section(&self) -> Section {
        Section::from_id(&self.start_section)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("cityguide_config_test_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.default_city, "New York");
        assert!(config.data_url.is_none());
        assert_eq!(config.simulated_delay(), Duration::from_millis(1000));
        assert_eq!(config.page_size(), 3);
        assert_eq!(config.initial_section(), Section::Housing);
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/cityguide_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let path = write_config("whitespace", "   \n  \n  ");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_city, "New York");
        cleanup(&path);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let path = write_config("partial", "default_city = \"Chicago\"\n");

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_city, "Chicago");
        assert_eq!(config.theme, "dark");
        assert_eq!(config.simulated_delay_ms, 1000);

        cleanup(&path);
    }

    #[test]
    fn test_full_config() {
        let content = r#"
theme = "light"
default_city = "Phoenix"
data_url = "https://data.example.com/cities"
simulated_delay_ms = 250
comments_per_page = 5

[keybindings]
quit = "Ctrl+q"
next_section = "F2"
"#;
        let path = write_config("full", content);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.default_city, "Phoenix");
        assert_eq!(
            config.data_url.as_deref(),
            Some("https://data.example.com/cities")
        );
        assert_eq!(config.simulated_delay(), Duration::from_millis(250));
        assert_eq!(config.page_size(), 5);
        assert_eq!(
            config.keybindings.get("next_section").map(String::as_str),
            Some("F2")
        );

        cleanup(&path);
    }

    #[test]
    fn test_start_section_resolves_by_id() {
        let path = write_config("start_section", "start_section = \"Shops\"\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.initial_section(), Section::Shops);
        cleanup(&path);

        let config: Config = toml::from_str("start_section = \"weather\"").unwrap();
        assert_eq!(config.initial_section(), Section::Housing);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let path = write_config("zero_page", "comments_per_page = 0\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_size(), 1);
        cleanup(&path);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let path = write_config("invalid", "this is not [valid toml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));

        cleanup(&path);
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let content = r#"
theme = "dark"
totally_fake_key = "should not fail"
"#;
        let path = write_config("unknown", content);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");

        cleanup(&path);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        // simulated_delay_ms must be an integer
        let path = write_config("wrongtype", "simulated_delay_ms = \"slow\"\n");
        assert!(Config::load(&path).is_err());
        cleanup(&path);
    }

    #[test]
    fn test_too_large_file_rejected() {
        let path = write_config("too_large", &"a".repeat(1_048_577));

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        cleanup(&path);
    }
}
