//! Note Manager for GlassDesk.
//!
//! Implements `NoteManagerTrait`: add, list and delete free-text notes,
//! backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use crate::types::errors::NoteError;
use crate::types::note::Note;

/// Trait defining note storage operations.
pub trait NoteManagerTrait {
    fn add_note(&mut self, content: &str) -> Result<Note, NoteError>;
    fn remove_note(&mut self, id: i64) -> Result<(), NoteError>;
    fn get_note(&self, id: i64) -> Result<Option<Note>, NoteError>;
    /// All notes in insertion order.
    fn list_notes(&self) -> Result<Vec<Note>, NoteError>;
    fn count(&self) -> Result<i64, NoteError>;
}

/// Note manager backed by a SQLite connection.
pub struct NoteManager<'a> {
    conn: &'a Connection,
}

impl<'a> NoteManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_note(row: &rusqlite::Row) -> rusqlite::Result<Note> {
        Ok(Note {
            id: row.get(0)?,
            content: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

impl<'a> NoteManagerTrait for NoteManager<'a> {
    /// Saves a note. Content made only of whitespace is rejected.
    fn add_note(&mut self, content: &str) -> Result<Note, NoteError> {
        if content.trim().is_empty() {
            return Err(NoteError::Validation("content must not be empty".to_string()));
        }

        let now = Self::now();
        self.conn
            .execute(
                "INSERT INTO notes (content, created_at) VALUES (?1, ?2)",
                params![content, now],
            )
            .map_err(|e| NoteError::DatabaseError(e.to_string()))?;
        let id = self.conn.last_insert_rowid();
        info!(note_id = id, "note saved");

        Ok(Note {
            id,
            content: content.to_string(),
            created_at: now,
        })
    }

    fn remove_note(&mut self, id: i64) -> Result<(), NoteError> {
        let affected = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .map_err(|e| NoteError::DatabaseError(e.to_string()))?;
        if affected == 0 {
            return Err(NoteError::NotFound(id));
        }
        info!(note_id = id, "note deleted");
        Ok(())
    }

    fn get_note(&self, id: i64) -> Result<Option<Note>, NoteError> {
        self.conn
            .query_row(
                "SELECT id, content, created_at FROM notes WHERE id = ?1",
                params![id],
                Self::row_to_note,
            )
            .optional()
            .map_err(|e| NoteError::DatabaseError(e.to_string()))
    }

    fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content, created_at FROM notes ORDER BY id ASC")
            .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_note)
            .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        let mut notes = Vec::new();
        for row in rows {
            notes.push(row.map_err(|e| NoteError::DatabaseError(e.to_string()))?);
        }
        Ok(notes)
    }

    fn count(&self) -> Result<i64, NoteError> {
        self.conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
            .map_err(|e| NoteError::DatabaseError(e.to_string()))
    }
}
