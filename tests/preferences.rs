//! Integration tests for the preference lifecycle: config defaults, stored
//! overrides and the first-visit flag across a reopened database.
//!
//! Each test uses its own in-memory SQLite database unless it needs a file.

use cityguide::config::Config;
use cityguide::preferences::PreferenceManager;
use cityguide::storage::Database;
use pretty_assertions::assert_eq;

async fn test_db() -> Database {
    Database::open(":memory:").await.unwrap()
}

#[tokio::test]
async fn test_config_values_are_defaults() {
    let db = test_db().await;
    let config: Config = toml::from_str("theme = \"light\"\ndefault_city = \"Chicago\"").unwrap();

    let prefs = PreferenceManager::load(&config, &db).await.unwrap();
    assert_eq!(prefs.theme_variant(), "light");
    assert_eq!(prefs.default_city(), "Chicago");
    assert!(!prefs.has_visited());
}

#[tokio::test]
async fn test_stored_values_override_config() {
    let db = test_db().await;
    let config: Config = toml::from_str("default_city = \"Chicago\"").unwrap();

    let mut prefs = PreferenceManager::load(&config, &db).await.unwrap();
    prefs.set(&db, "default_city", "Houston").await.unwrap();

    let reloaded = PreferenceManager::load(&config, &db).await.unwrap();
    assert_eq!(reloaded.default_city(), "Houston");
}

#[tokio::test]
async fn test_keybinding_overrides_merge() {
    let db = test_db().await;
    let config: Config = toml::from_str("[keybindings]\nquit = \"Ctrl+q\"").unwrap();
    db.set_preference("keybind.help", "F1").await.unwrap();

    let prefs = PreferenceManager::load(&config, &db).await.unwrap();
    let overrides = prefs.keybinding_overrides();
    assert_eq!(overrides.get("quit").map(String::as_str), Some("Ctrl+q"));
    assert_eq!(overrides.get("help").map(String::as_str), Some("F1"));
}

#[tokio::test]
async fn test_visited_flag_survives_reopen() {
    let dir = std::env::temp_dir().join(format!("cityguide-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("visited.db");
    let path_str = path.to_str().unwrap();

    {
        let db = Database::open(path_str).await.unwrap();
        assert!(!db.has_visited().await.unwrap());
        db.mark_visited().await.unwrap();
    }

    let db = Database::open(path_str).await.unwrap();
    assert!(db.has_visited().await.unwrap());
    db.reset_visited().await.unwrap();
    assert!(!db.has_visited().await.unwrap());

    drop(db);
    let _ = std::fs::remove_dir_all(&dir);
}
