use rusqlite::{Connection, OptionalExtension};

use crate::{Error, stores::KeyValueStore};

/// A key-value store backed by a single SQLite table.
#[derive(Debug)]
pub struct SQLiteKeyValueStore {
    connection: Connection,
}

impl SQLiteKeyValueStore {
    /// Create a store using `connection`, creating the table if needed.
    ///
    /// # Errors
    /// Returns [Error::StorageUnavailable] if the table could not be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;

        Ok(Self { connection })
    }
}

impl KeyValueStore for SQLiteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row("SELECT value FROM key_value WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Error::from)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}
