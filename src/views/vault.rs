//! Vault screen: entry list with a single reveal toggle and an add-entry modal.

use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::bridge::{invoke_as, CommandBridge};
use super::sequence::{RequestSequencer, RequestTicket};
use super::Notification;
use crate::types::errors::BridgeError;

/// Placeholder shown instead of a hidden password.
pub const MASK: &str = "••••••";

/// A vault entry as returned by `get_password_entries`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VaultItem {
    pub id: i64,
    pub service: String,
    pub username: String,
    pub password: String,
}

impl VaultItem {
    /// Upper-cased first character of the service, used as an avatar.
    pub fn initial(&self) -> Option<char> {
        self.service.chars().next().map(|c| c.to_uppercase().next().unwrap_or(c))
    }
}

/// The add-entry form.
#[derive(Debug, Default, Clone)]
pub struct EntryForm {
    pub service: String,
    pub username: String,
    pub password: String,
}

impl EntryForm {
    pub fn is_complete(&self) -> bool {
        !self.service.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct VaultView {
    pub form: EntryForm,
    entries: Vec<VaultItem>,
    visible_id: Option<i64>,
    modal_open: bool,
    seq: RequestSequencer,
}

impl VaultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[VaultItem] {
        &self.entries
    }

    pub fn visible_id(&self) -> Option<i64> {
        self.visible_id
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Reveals `id`, or hides it if it is the one already revealed.
    /// At most one entry is revealed at a time.
    pub fn toggle_reveal(&mut self, id: i64) {
        self.visible_id = if self.visible_id == Some(id) { None } else { Some(id) };
    }

    /// The password text to render for `item`: the real one if revealed.
    pub fn display_password<'a>(&self, item: &'a VaultItem) -> &'a str {
        if self.visible_id == Some(item.id) {
            &item.password
        } else {
            MASK
        }
    }

    /// Returns the password to place on the clipboard.
    pub fn copy_password(&self, id: i64) -> Option<(String, Notification)> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| (e.password.clone(), Notification::success("Copied!")))
    }

    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.seq.begin()
    }

    pub fn apply_entries(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<VaultItem>, BridgeError>,
    ) -> Option<Notification> {
        if !self.seq.accept(ticket) {
            return None;
        }
        match result {
            Ok(entries) => {
                if let Some(id) = self.visible_id {
                    if !entries.iter().any(|e| e.id == id) {
                        self.visible_id = None;
                    }
                }
                self.entries = entries;
                None
            }
            Err(e) => Some(Notification::error(e.to_string())),
        }
    }

    pub fn refresh(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        let ticket = self.begin_fetch();
        let result = invoke_as(bridge, "get_password_entries", json!({}));
        self.apply_entries(ticket, result)
    }

    /// Saves the form. An incomplete form aborts silently and stays open.
    pub fn save(&mut self, bridge: &dyn CommandBridge) -> Option<Notification> {
        if !self.form.is_complete() {
            return None;
        }
        let params = json!({
            "service": self.form.service,
            "username": self.form.username,
            "password": self.form.password,
        });
        if let Err(e) = bridge.invoke("add_password_entry", params) {
            return Some(Notification::error(e.to_string()));
        }
        self.form = EntryForm::default();
        self.modal_open = false;
        self.refetch_after_write(bridge);
        Some(Notification::success("Saved to Vault"))
    }

    pub fn delete(&mut self, bridge: &dyn CommandBridge, id: i64) -> Option<Notification> {
        if let Err(e) = bridge.invoke("delete_password_entry", json!({"id": id})) {
            return Some(Notification::error(e.to_string()));
        }
        self.refetch_after_write(bridge);
        Some(Notification::error("Entry removed"))
    }

    /// The write already succeeded, so a failed refetch only leaves the
    /// list stale until the next refresh.
    fn refetch_after_write(&mut self, bridge: &dyn CommandBridge) {
        if let Some(n) = self.refresh(bridge) {
            warn!(message = %n.message, "vault refetch failed");
        }
    }
}
