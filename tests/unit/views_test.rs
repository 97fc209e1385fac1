//! Unit tests for the presentation-state core.
//!
//! End-to-end flows go through `LocalBridge` into a real App; failure and
//! ordering cases use a scripted bridge.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tempfile::TempDir;

use glassdesk::app::App;
use glassdesk::services::settings_engine::SettingsEngine;
use glassdesk::types::errors::BridgeError;
use glassdesk::types::settings::GeneratorSettings;
use glassdesk::views::bridge::{CommandBridge, LocalBridge};
use glassdesk::views::dashboard::{DashboardView, LOADING_TEXT};
use glassdesk::views::generator::GeneratorView;
use glassdesk::views::notes::{NoteItem, NotesView};
use glassdesk::views::remote::{ConnectionStatus, RemoteView, CONNECT_DELAY, LOADING_IP_TEXT};
use glassdesk::views::vault::{VaultItem, VaultView, MASK};
use glassdesk::views::{Notification, NotificationLevel, ShellState, Tab};

fn local_bridge() -> (LocalBridge, TempDir) {
    let tmp = TempDir::new().unwrap();
    let settings = SettingsEngine::new(Some(tmp.path().join("settings.json").to_string_lossy().to_string()));
    let app = App::with_settings(tmp.path().join("views.db").to_str().unwrap(), settings).unwrap();
    (LocalBridge::new(app), tmp)
}

/// Answers each command from a fixed table and records every call.
#[derive(Default)]
struct ScriptedBridge {
    answers: HashMap<&'static str, Result<Value, String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBridge {
    fn answer(mut self, command: &'static str, result: Result<Value, String>) -> Self {
        self.answers.insert(command, result);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandBridge for ScriptedBridge {
    fn invoke(&self, command: &str, _params: Value) -> Result<Value, BridgeError> {
        self.calls.lock().unwrap().push(command.to_string());
        match self.answers.get(command) {
            Some(Ok(v)) => Ok(v.clone()),
            Some(Err(m)) => Err(BridgeError::Command { command: command.to_string(), message: m.clone() }),
            None => Err(BridgeError::Command { command: command.to_string(), message: "unscripted".to_string() }),
        }
    }
}

// ─── Shell ───

#[test]
fn test_shell_tab_selection() {
    let mut shell = ShellState::default();
    assert_eq!(shell.current(), Tab::Dashboard);
    assert_eq!(shell.select(Tab::Vault), Some(Tab::Dashboard));
    assert_eq!(shell.select(Tab::Vault), None);
    assert_eq!(shell.current(), Tab::Vault);
}

// ─── Dashboard ───

#[test]
fn test_dashboard_refresh() {
    let (bridge, _tmp) = local_bridge();
    let mut view = DashboardView::new();
    assert_eq!(view.stats(), LOADING_TEXT);
    assert!(view.refresh(&bridge).is_none());
    assert!(view.stats().starts_with("RAM: "));
}

#[test]
fn test_dashboard_drops_stale_response() {
    let mut view = DashboardView::new();
    let older = view.begin_refresh();
    let newer = view.begin_refresh();

    assert!(view.apply_stats(newer, Ok("RAM: 2 GB Used / 8 GB Total".to_string())).is_none());
    assert!(view.apply_stats(older, Ok("RAM: 1 GB Used / 8 GB Total".to_string())).is_none());
    assert_eq!(view.stats(), "RAM: 2 GB Used / 8 GB Total");
}

#[test]
fn test_dashboard_failure_is_reported() {
    let bridge = ScriptedBridge::default().answer("get_system_stats", Err("sampler down".to_string()));
    let mut view = DashboardView::new();
    let n = view.refresh(&bridge).expect("failure should notify");
    assert_eq!(n.level, NotificationLevel::Error);
    assert!(n.message.contains("sampler down"));
}

// ─── Notes ───

#[test]
fn test_notes_save_and_delete_flow() {
    let (bridge, _tmp) = local_bridge();
    let mut view = NotesView::new();
    assert!(view.refresh(&bridge).is_none());

    view.draft = "remember the milk".to_string();
    assert_eq!(view.save(&bridge), Some(Notification::success("Note saved")));
    assert!(view.draft.is_empty());
    assert_eq!(view.notes().len(), 1);
    assert_eq!(view.notes()[0].content, "remember the milk");

    let id = view.notes()[0].id;
    assert_eq!(view.delete(&bridge, id), Some(Notification::error("Note deleted")));
    assert!(view.notes().is_empty());
}

#[test]
fn test_notes_blank_draft_is_ignored() {
    let bridge = ScriptedBridge::default();
    let mut view = NotesView::new();
    view.draft = "   ".to_string();
    assert!(view.save(&bridge).is_none());
    assert!(bridge.calls().is_empty());
}

#[test]
fn test_notes_failed_save_keeps_draft() {
    let bridge = ScriptedBridge::default().answer("add_note", Err("disk full".to_string()));
    let mut view = NotesView::new();
    view.draft = "keep me".to_string();
    let n = view.save(&bridge).unwrap();
    assert_eq!(n.level, NotificationLevel::Error);
    assert_eq!(view.draft, "keep me");
    assert_eq!(bridge.calls(), vec!["add_note"]);
}

#[test]
fn test_notes_save_reports_success_when_refetch_fails() {
    let bridge = ScriptedBridge::default()
        .answer("add_note", Ok(json!({"id": 1, "content": "kept"})))
        .answer("delete_note", Ok(json!({"ok": true})));
    let mut view = NotesView::new();
    view.draft = "kept".to_string();

    assert_eq!(view.save(&bridge), Some(Notification::success("Note saved")));
    assert!(view.draft.is_empty());
    assert_eq!(view.delete(&bridge, 1), Some(Notification::error("Note deleted")));
    assert_eq!(bridge.calls(), vec!["add_note", "get_notes", "delete_note", "get_notes"]);
}

#[test]
fn test_notes_stale_list_is_not_applied() {
    let mut view = NotesView::new();
    let older = view.begin_fetch();
    let newer = view.begin_fetch();
    let fresh = vec![NoteItem { id: 2, content: "fresh".to_string() }];
    let stale = vec![NoteItem { id: 1, content: "stale".to_string() }];

    view.apply_notes(newer, Ok(fresh.clone()));
    view.apply_notes(older, Ok(stale));
    assert_eq!(view.notes(), fresh.as_slice());
}

#[test]
fn test_notes_bad_payload_is_a_decode_error() {
    let bridge = ScriptedBridge::default().answer("get_notes", Ok(json!({"not": "a list"})));
    let mut view = NotesView::new();
    let n = view.refresh(&bridge).unwrap();
    assert!(n.message.starts_with("Unexpected response from get_notes"));
}

// ─── Vault ───

#[test]
fn test_vault_save_flow() {
    let (bridge, _tmp) = local_bridge();
    let mut view = VaultView::new();
    view.open_modal();
    view.form.service = "GitHub".to_string();
    view.form.username = "alice".to_string();
    view.form.password = "p@ss".to_string();

    assert_eq!(view.save(&bridge), Some(Notification::success("Saved to Vault")));
    assert!(!view.is_modal_open());
    assert!(view.form.service.is_empty());
    assert_eq!(view.entries().len(), 1);
    assert_eq!(view.entries()[0].service, "GitHub");
}

#[test]
fn test_vault_save_reports_success_when_refetch_fails() {
    let bridge = ScriptedBridge::default()
        .answer("add_password_entry", Ok(json!({"id": 1, "service": "GitHub", "username": "", "password": "p@ss"})))
        .answer("delete_password_entry", Ok(json!({"ok": true})));
    let mut view = VaultView::new();
    view.open_modal();
    view.form.service = "GitHub".to_string();
    view.form.password = "p@ss".to_string();

    assert_eq!(view.save(&bridge), Some(Notification::success("Saved to Vault")));
    assert!(!view.is_modal_open());
    assert!(view.form.service.is_empty());
    assert_eq!(view.delete(&bridge, 1), Some(Notification::error("Entry removed")));
    assert_eq!(
        bridge.calls(),
        vec!["add_password_entry", "get_password_entries", "delete_password_entry", "get_password_entries"]
    );
}

#[test]
fn test_vault_incomplete_form_aborts_silently() {
    let bridge = ScriptedBridge::default();
    let mut view = VaultView::new();
    view.open_modal();
    view.form.service = "GitHub".to_string();
    assert!(view.save(&bridge).is_none());
    assert!(view.is_modal_open());
    assert!(bridge.calls().is_empty());
}

#[test]
fn test_vault_reveal_toggle_and_mask() {
    let bridge = ScriptedBridge::default().answer(
        "get_password_entries",
        Ok(json!([
            {"id": 1, "service": "mail", "username": "a", "password": "one"},
            {"id": 2, "service": "bank", "username": "b", "password": "two"}
        ])),
    );
    let mut view = VaultView::new();
    view.refresh(&bridge);
    let (first, second) = (view.entries()[0].clone(), view.entries()[1].clone());
    assert_eq!(first.initial(), Some('M'));

    assert_eq!(view.display_password(&first), MASK);
    view.toggle_reveal(1);
    assert_eq!(view.display_password(&first), "one");
    assert_eq!(view.display_password(&second), MASK);

    view.toggle_reveal(2);
    assert_eq!(view.visible_id(), Some(2));
    assert_eq!(view.display_password(&first), MASK);

    view.toggle_reveal(2);
    assert_eq!(view.visible_id(), None);
}

#[test]
fn test_vault_delete_hides_removed_entry() {
    let (bridge, _tmp) = local_bridge();
    let mut view = VaultView::new();
    view.form.service = "S".to_string();
    view.form.password = "P".to_string();
    view.save(&bridge);
    let id = view.entries()[0].id;
    view.toggle_reveal(id);

    assert_eq!(view.delete(&bridge, id), Some(Notification::error("Entry removed")));
    assert!(view.entries().is_empty());
    assert_eq!(view.visible_id(), None);
}

#[test]
fn test_vault_copy_password() {
    let mut view = VaultView::new();
    let t = view.begin_fetch();
    view.apply_entries(
        t,
        Ok(vec![VaultItem { id: 3, service: "x".into(), username: "".into(), password: "pw".into() }]),
    );
    let (text, n) = view.copy_password(3).unwrap();
    assert_eq!(text, "pw");
    assert_eq!(n, Notification::success("Copied!"));
    assert!(view.copy_password(4).is_none());
}

// ─── Generator ───

#[test]
fn test_generator_view_flow() {
    let (bridge, _tmp) = local_bridge();
    let mut view = GeneratorView::new(GeneratorSettings::default());
    assert_eq!(view.length(), 16);
    assert_eq!(view.display(), "Generate...");
    assert!(view.copy().is_none());

    view.set_length(24);
    assert_eq!(view.generate(&bridge), Notification::info("Generated!"));
    assert_eq!(view.generated().unwrap().len(), 24);
    assert_eq!(view.copy().unwrap().0, view.generated().unwrap());
}

#[test]
fn test_generator_summary_omits_password() {
    let (bridge, _tmp) = local_bridge();
    let mut view = GeneratorView::new(GeneratorSettings::default());
    assert!(view.summary().is_none());

    view.include_symbols = false;
    view.set_length(20);
    view.generate(&bridge);
    let password = view.generated().unwrap().to_string();
    let summary = view.summary().unwrap();
    assert_eq!(summary, "20 chars, numbers: true, symbols: false");
    assert!(!summary.contains(&password));
}

#[test]
fn test_generator_slider_clamps() {
    let mut view = GeneratorView::new(GeneratorSettings::default());
    view.set_length(2);
    assert_eq!(view.length(), 6);
    view.set_length(500);
    assert_eq!(view.length(), 64);
}

// ─── Remote ───

#[test]
fn test_remote_requires_target() {
    let mut view = RemoteView::new();
    let n = view.connect(Instant::now()).unwrap();
    assert_eq!(n, Notification::error("Please enter Target IP"));
    assert_eq!(view.status(), ConnectionStatus::Idle);
}

#[test]
fn test_remote_simulated_connection() {
    let mut view = RemoteView::new();
    view.target_ip = "192.168.1.20".to_string();
    let start = Instant::now();

    assert!(view.connect(start).is_none());
    assert_eq!(view.status(), ConnectionStatus::Connecting);
    assert!(view.tick(start + Duration::from_millis(500)).is_none());
    assert_eq!(view.status(), ConnectionStatus::Connecting);

    let n = view.tick(start + CONNECT_DELAY).unwrap();
    assert_eq!(n, Notification::success("Connected to 192.168.1.20"));
    assert_eq!(view.status(), ConnectionStatus::Connected);

    assert_eq!(view.disconnect(), Notification::info("Disconnected"));
    assert_eq!(view.status(), ConnectionStatus::Idle);
}

#[test]
fn test_remote_disconnect_cancels_pending_connect() {
    let mut view = RemoteView::new();
    view.target_ip = "10.0.0.2".to_string();
    let start = Instant::now();
    view.connect(start);
    view.disconnect();
    assert!(view.tick(start + CONNECT_DELAY * 2).is_none());
    assert_eq!(view.status(), ConnectionStatus::Idle);
}

#[test]
fn test_remote_load_ip() {
    let bridge = ScriptedBridge::default().answer("get_my_ip", Ok(json!("192.168.1.7")));
    let mut view = RemoteView::new();
    assert_eq!(view.my_ip(), LOADING_IP_TEXT);
    assert!(view.load_ip(&bridge).is_none());
    assert_eq!(view.my_ip(), "192.168.1.7");
    assert_eq!(view.copy_ip().0, "192.168.1.7");

    let failing = ScriptedBridge::default().answer("get_my_ip", Err("no route".to_string()));
    let n = view.load_ip(&failing).unwrap();
    assert_eq!(n.level, NotificationLevel::Error);
}
