//! Durable slot storage over SQLite.
//!
//! Slots are rows in the `storage_slots` table keyed by slot name; schema
//! migrations run automatically when the store is opened.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use super::migrations;
use super::slot::SlotStore;
use crate::types::errors::StorageError;

/// SQLite-backed slot store.
///
/// Owns a `rusqlite::Connection` and ensures the slot table exists when
/// the store is opened.
pub struct SqliteSlotStore {
    conn: Connection,
}

impl SqliteSlotStore {
    /// Opens (or creates) the database file at `path` and runs migrations.
    ///
    /// # Errors
    /// Returns `StorageError::Unavailable` if the connection cannot be
    /// established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store, discarded when dropped. Useful for testing.
    ///
    /// # Errors
    /// Returns `StorageError::Unavailable` if the connection cannot be
    /// established or migrations fail.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn now_secs() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl SlotStore for SqliteSlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_slots WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO storage_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, Self::now_secs()],
        )?;
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM storage_slots WHERE key = ?1", [key])?;
        Ok(())
    }
}
