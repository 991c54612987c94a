use anyhow::Result;

use super::schema::Database;

/// Set once the welcome toast has been shown.
pub const HAS_VISITED_KEY: &str = "has_visited";

impl Database {
    // ========================================================================
    // User Preferences Operations
    // ========================================================================

    /// Get a single preference value by key, or `None` if not set.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM user_preferences WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Set a preference value (UPSERT).
    ///
    /// Inserts the key-value pair if it doesn't exist, or updates the value and
    /// timestamp if the key already exists.
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_preferences (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a preference. Returns whether a row existed.
    pub async fn delete_preference(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get all preferences matching a key prefix, ordered by key.
    pub async fn get_preferences_by_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        let pattern = format!("{}%", prefix);
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM user_preferences WHERE key LIKE ? ORDER BY key")
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    // ========================================================================
    // First-visit flag
    // ========================================================================

    pub async fn has_visited(&self) -> Result<bool> {
        Ok(self
            .get_preference(HAS_VISITED_KEY)
            .await?
            .is_some_and(|v| v == "true"))
    }

    pub async fn mark_visited(&self) -> Result<()> {
        self.set_preference(HAS_VISITED_KEY, "true").await
    }

    /// Forget the visit so the welcome toast shows again on next start.
    pub async fn reset_visited(&self) -> Result<()> {
        self.delete_preference(HAS_VISITED_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::Database;

    async fn test_db() -> Database {
        Database::open(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_get_preference_missing() {
        let db = test_db().await;
        let value = db.get_preference("nonexistent.key").await.unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_set_preference_upsert() {
        let db = test_db().await;
        db.set_preference("theme.variant", "dark").await.unwrap();
        db.set_preference("theme.variant", "light").await.unwrap();

        let value = db.get_preference("theme.variant").await.unwrap();
        assert_eq!(value, Some("light".to_string()));
    }

    #[tokio::test]
    async fn test_get_preferences_by_prefix_no_false_matches() {
        let db = test_db().await;
        db.set_preference("theme.variant", "dark").await.unwrap();
        db.set_preference("thematic.value", "test").await.unwrap();

        // "theme." should not match "thematic."
        let prefs = db.get_preferences_by_prefix("theme.").await.unwrap();
        assert_eq!(prefs, vec![("theme.variant".to_string(), "dark".to_string())]);
    }

    #[tokio::test]
    async fn test_delete_preference() {
        let db = test_db().await;
        db.set_preference("city.default", "Chicago").await.unwrap();

        assert!(db.delete_preference("city.default").await.unwrap());
        assert!(!db.delete_preference("city.default").await.unwrap());
        assert_eq!(db.get_preference("city.default").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_visited_flag_round_trip() {
        let db = test_db().await;
        assert!(!db.has_visited().await.unwrap());

        db.mark_visited().await.unwrap();
        assert!(db.has_visited().await.unwrap());

        db.reset_visited().await.unwrap();
        assert!(!db.has_visited().await.unwrap());
    }

    #[tokio::test]
    async fn test_visited_flag_requires_true() {
        let db = test_db().await;
        db.set_preference(super::HAS_VISITED_KEY, "no").await.unwrap();
        assert!(!db.has_visited().await.unwrap());
    }
}
