//! SQLite-backed collection store.
//!
//! # Invariants
//! - One row per key in `collections`; writes upsert the full payload.

use super::{KeyValueStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Store over a migrated board connection (see `db::open_db`).
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM collections WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn write(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO collections (key, payload)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, payload],
        )?;
        Ok(())
    }
}
