use crate::model::Entry;
use log::debug;
use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

pub const MAX_VALUE_LEN: usize = 1024;
pub const MAX_LABEL_LEN: usize = 256;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("entry value must not be empty")]
    EmptyValue,
    #[error("entry value is {0} characters, limit is 1024")]
    ValueTooLong(usize),
    #[error("bookmark name is {0} characters, limit is 256")]
    LabelTooLong(usize),
}

/// Outcome of [`Store::insert_if_absent`]; a conflict is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyPresent,
}

/// File-backed history/bookmark table. Dropping it closes the connection.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        debug!("Opening store at {:?}", path);
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS history
            (
                value         VARCHAR(1024) PRIMARY KEY NOT NULL,
                bookmarked    TINYINT      DEFAULT 0    NOT NULL,
                bookmark_name VARCHAR(256) DEFAULT NULL
            );",
        )?;
        Ok(())
    }

    /// Rows with the given bookmark flag, ascending by value.
    pub fn read_partition(&self, bookmarked: bool) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT value, bookmarked, bookmark_name FROM history \
             WHERE bookmarked = ?1 ORDER BY value",
        )?;
        let rows = stmt.query_map(params![bookmarked], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Every row, ascending by value.
    pub fn read_all(&self) -> Result<Vec<Entry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT value, bookmarked, bookmark_name FROM history ORDER BY value",
        )?;
        let rows = stmt.query_map([], row_to_entry)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Replaces the whole row for `value`.
    pub fn upsert(&self, value: &str, bookmarked: bool, label: Option<&str>) -> Result<(), StoreError> {
        validate_entry(value, label)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO history (value, bookmarked, bookmark_name) VALUES (?1, ?2, ?3)",
            params![value, bookmarked, label],
        )?;
        debug!("Upserted {:?} (bookmarked={}, label={:?})", value, bookmarked, label);
        Ok(())
    }

    /// Writes the row only if `value` is not stored yet. An existing row is left untouched.
    pub fn insert_if_absent(
        &self,
        value: &str,
        bookmarked: bool,
        label: Option<&str>,
    ) -> Result<InsertOutcome, StoreError> {
        validate_entry(value, label)?;
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO history (value, bookmarked, bookmark_name) VALUES (?1, ?2, ?3)",
            params![value, bookmarked, label],
        )?;
        let outcome = if changed == 0 {
            InsertOutcome::AlreadyPresent
        } else {
            InsertOutcome::Inserted
        };
        debug!("Insert {:?}: {:?}", value, outcome);
        Ok(outcome)
    }

    /// Removes the row keyed on `value`. Returns whether a row existed.
    pub fn delete(&self, value: &str) -> Result<bool, StoreError> {
        let removed = self.conn.execute("DELETE FROM history WHERE value = ?1", params![value])?;
        debug!("Delete {:?}: {} row(s)", value, removed);
        Ok(removed > 0)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry::new(
        row.get::<_, String>(0)?,
        row.get::<_, i64>(1)? != 0,
        row.get(2)?,
    ))
}

/// Checks the length limits without touching the table.
pub fn validate_entry(value: &str, label: Option<&str>) -> Result<(), StoreError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(StoreError::EmptyValue);
    }
    if len > MAX_VALUE_LEN {
        return Err(StoreError::ValueTooLong(len));
    }
    if let Some(label) = label {
        let len = label.chars().count();
        if len > MAX_LABEL_LEN {
            return Err(StoreError::LabelTooLong(len));
        }
    }
    Ok(())
}
