//! SQLite-based store implementation

use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::{Store, StoreResult};

/// SQLite-backed key-value store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a store at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Key-value blobs: one row per logical record
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.conn.lock().unwrap();

        let value: Option<String> = conn
            .query_row("SELECT value FROM kv WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            r#"
            INSERT INTO kv (key, value)
            VALUES (?, ?)
            ON CONFLICT(key)
            DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;

        debug!(key, bytes = value.len(), "Blob stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM kv WHERE key = ?", [key])?;
        debug!(key, "Blob removed");
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        match self.conn.lock() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => {
                warn!("Store lock poisoned");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCHEDULE_KEY, USER_PROFILE_KEY};

    #[test]
    fn in_memory_store_is_healthy() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.is_healthy());
    }

    #[test]
    fn get_set_remove_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();

        assert!(store.get("missing").unwrap().is_none());

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        // Overwrite replaces
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Removing an absent key is not an error
        store.remove("k").unwrap();
    }

    #[test]
    fn corrupt_profile_reads_as_absent() {
        let store = SqliteStore::in_memory().unwrap();
        store.set(USER_PROFILE_KEY, "{not json").unwrap();
        assert!(store.load_profile().unwrap().is_none());
    }

    #[test]
    fn corrupt_schedule_reads_as_empty() {
        let store = SqliteStore::in_memory().unwrap();
        store.set(SCHEDULE_KEY, "[{\"id\":").unwrap();
        assert!(store.load_schedule().unwrap().is_empty());
    }

    #[test]
    fn absent_schedule_is_empty_list() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.load_schedule().unwrap().is_empty());
        store.clear_schedule().unwrap(); // idempotent on absent key
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("confmate.db");

        {
            let store = SqliteStore::open(&db).unwrap();
            store.set("k", "v").unwrap();
        }

        let store = SqliteStore::open(&db).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
