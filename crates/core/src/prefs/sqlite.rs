//! SQLite-backed preference store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::{PrefKey, PreferencesStore, PrefsError};

/// SQLite-backed preference store.
pub struct SqlitePreferences {
    conn: Mutex<Connection>,
}

impl SqlitePreferences {
    /// Open (or create) the preference database at the given path.
    pub fn new(path: &Path) -> Result<Self, PrefsError> {
        let conn = Connection::open(path).map_err(|e| PrefsError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory preference store (useful for testing).
    pub fn in_memory() -> Result<Self, PrefsError> {
        let conn =
            Connection::open_in_memory().map_err(|e| PrefsError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), PrefsError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| PrefsError::Database(e.to_string()))?;
        Ok(())
    }
}

impl PreferencesStore for SqlitePreferences {
    fn get(&self, key: PrefKey) -> Result<Option<String>, PrefsError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key.as_str()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| PrefsError::Database(e.to_string()))
    }

    fn set(&self, key: PrefKey, value: &str) -> Result<(), PrefsError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key.as_str(), value, Utc::now().to_rfc3339()],
        )
        .map_err(|e| PrefsError::Database(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: PrefKey) -> Result<(), PrefsError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM preferences WHERE key = ?1",
            params![key.as_str()],
        )
        .map_err(|e| PrefsError::Database(e.to_string()))?;
        Ok(())
    }
}
