//! Preference manager that merges config.toml defaults with DB overrides.
//!
//! Config values serve as defaults; DB values (user_preferences table) override them.
//! Writes always go to the DB, never to the config file.
use std::collections::HashMap;

use anyhow::Result;

use crate::config::Config;
use crate::storage::{Database, HAS_VISITED_KEY};

// ============================================================================
// PreferenceManager
// ============================================================================

/// Merged preference store: config.toml defaults + DB overrides.
///
/// Reads are in-memory. Writes persist to the DB and then update the map.
pub struct PreferenceManager {
    prefs: HashMap<String, String>,
}

impl PreferenceManager {
    /// Load preferences by merging config defaults with DB overrides.
    pub async fn load(config: &Config, db: &Database) -> Result<Self> {
        let mut prefs = Self::flatten_config(config);

        // DB wins over config
        for (key, value) in db.get_preferences_by_prefix("").await? {
            prefs.insert(key, value);
        }

        Ok(Self { prefs })
    }

    /// Create from config only (no DB). Fallback for when DB load fails.
    pub fn from_config(config: &Config) -> Self {
        Self {
            prefs: Self::flatten_config(config),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.prefs.get(key).map(String::as_str)
    }

    /// Set a preference: writes to DB and updates in-memory map.
    pub async fn set(&mut self, db: &Database, key: &str, value: &str) -> Result<()> {
        db.set_preference(key, value).await?;
        self.prefs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    // ========================================================================
    // Type-safe Accessors
    // ========================================================================

    pub fn theme_variant(&self) -> &str {
        self.get("theme").unwrap_or("dark")
    }

    pub fn default_city(&self) -> &str {
        self.get("default_city")
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(crate::domain::mock::DEFAULT_CITY)
    }

    /// Whether the welcome toast has already been shown.
    pub fn has_visited(&self) -> bool {
        self.get(HAS_VISITED_KEY).is_some_and(|v| v == "true")
    }

    /// Keybinding overrides as `(action, key)` pairs.
    pub fn keybinding_overrides(&self) -> HashMap<String, String> {
        self.prefs
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix("keybind.")
                    .map(|action| (action.to_string(), v.clone()))
            })
            .collect()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Flatten Config struct into dotted key-value pairs.
    fn flatten_config(config: &Config) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("theme".to_string(), config.theme.clone());
        map.insert("default_city".to_string(), config.default_city.clone());

        for (action, key_str) in &config.keybindings {
            map.insert(format!("keybind.{}", action), key_str.clone());
        }

        map
    }
}

// ============================================================================
// Tests
// ============================================================================
