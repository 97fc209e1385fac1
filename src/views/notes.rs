//! Notes screen: a draft box and the list of saved notes.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::bridge::{invoke_as, CommandBridge};
use super::sequence::{RequestSequencer, RequestTicket};
use super::Notification;
use crate::types::errors::BridgeError;

/// A note as returned by `get_notes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteItem {
    pub id: i64,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct NotesView {
    pub draft: String,
    notes: Vec<NoteItem>,
    seq: RequestSequencer,
}

impl NotesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[NoteItem] {
        &self.notes
    }

    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.seq.begin()
    }

    /// Replaces the list with a fetched one unless a newer fetch already landed.
    pub fn apply_notes(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<NoteItem>, BridgeError>,
    ) -> Option<Notification> {
        if !self.seq.accept(ticket) {
            return None;
        }
        match result {
            Ok(notes) => {
                self.notes = notes;
                None
            }
            Err(e) => Some(Notification::error(e.to_string())),
        }
    }

    pub fn refresh(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        let ticket = self.begin_fetch();
        let result = invoke_as(bridge, "get_notes", json!({}));
        self.apply_notes(ticket, result)
    }

    /// Saves the draft. A blank draft is ignored without a message.
    pub fn save(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        if self.draft.trim().is_empty() {
            return None;
        }
        if let Err(e) = bridge.invoke("add_note", json!({"text": self.draft})) {
            return Some(Notification::error(e.to_string()));
        }
        self.draft.clear();
        self.refetch_after_write(bridge);
        Some(Notification::success("Note saved"))
    }

    pub fn delete(&mut self, bridge: &dyn CommandBridge, id: i64) -> Option<Notification> {
        if let Err(e) = bridge.invoke("delete_note", json!({"id": id})) {
            return Some(Notification::error(e.to_string()));
        }
        self.refetch_after_write(bridge);
        Some(Notification::error("Note deleted"))
    }

    /// The write already succeeded, so a failed refetch only leaves the
    /// list stale until the next refresh.
    fn refetch_after_write(&mut self, bridge: &dyn CommandBridge) {
        if let Some(n) = self.refresh(bridge) {
            warn!(message = %n.message, "notes refetch failed");
        }
    }
}
