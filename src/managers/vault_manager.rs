//! Vault Manager for GlassDesk.
//!
//! Stores credential entries (service, username, password) in SQLite.
//! Entries are listed in insertion order and are never re-sorted here.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::types::credential::PasswordEntry;
use crate::types::errors::VaultError;

/// Trait defining credential vault operations.
pub trait VaultManagerTrait {
    /// Adds an entry and returns its freshly assigned id.
    fn add_entry(&mut self, service: &str, username: &str, password: &str) -> Result<i64, VaultError>;
    fn remove_entry(&mut self, id: i64) -> Result<(), VaultError>;
    fn get_entry(&self, id: i64) -> Result<Option<PasswordEntry>, VaultError>;
    fn list_entries(&self) -> Result<Vec<PasswordEntry>, VaultError>;
    fn count(&self) -> Result<i64, VaultError>;
}

/// Vault manager backed by a SQLite connection.
pub struct VaultManager<'a> {
    conn: &'a Connection,
}

impl<'a> VaultManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<PasswordEntry> {
        Ok(PasswordEntry {
            id: row.get(0)?,
            service: row.get(1)?,
            username: row.get(2)?,
            password: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl<'a> VaultManagerTrait for VaultManager<'a> {
    /// Service and password are required; username may be empty.
    fn add_entry(&mut self, service: &str, username: &str, password: &str) -> Result<i64, VaultError> {
        if service.is_empty() {
            return Err(VaultError::Validation("service is required".to_string()));
        }
        if password.is_empty() {
            return Err(VaultError::Validation("password is required".to_string()));
        }

        self.conn
            .execute(
                "INSERT INTO password_entries (service, username, password, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![service, username, password, Self::now()],
            )
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;
        let id = self.conn.last_insert_rowid();
        info!(entry_id = id, service, "vault entry saved");
        Ok(id)
    }

    fn remove_entry(&mut self, id: i64) -> Result<(), VaultError> {
        let affected = self
            .conn
            .execute("DELETE FROM password_entries WHERE id = ?1", params![id])
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;
        if affected == 0 {
            return Err(VaultError::NotFound(id));
        }
        info!(entry_id = id, "vault entry removed");
        Ok(())
    }

    fn get_entry(&self, id: i64) -> Result<Option<PasswordEntry>, VaultError> {
        self.conn
            .query_row(
                "SELECT id, service, username, password, created_at FROM password_entries WHERE id = ?1",
                params![id],
                Self::row_to_entry,
            )
            .optional()
            .map_err(|e| VaultError::DatabaseError(e.to_string()))
    }

    fn list_entries(&self) -> Result<Vec<PasswordEntry>, VaultError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, service, username, password, created_at FROM password_entries ORDER BY id ASC")
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        let entries = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|e| VaultError::DatabaseError(e.to_string()))?;

        let mut result = Vec::new();
        for entry in entries {
            result.push(entry.map_err(|e| VaultError::DatabaseError(e.to_string()))?);
        }
        Ok(result)
    }

    fn count(&self) -> Result<i64, VaultError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM password_entries", [], |row| row.get(0))
            .map_err(|e| VaultError::DatabaseError(e.to_string()))
    }
}
