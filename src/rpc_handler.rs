//! Command handler for the GlassDesk command bridge.
//!
//! `handle_method` dispatches a named command with JSON parameters to the
//! managers and services held by [`App`]. It is shared by the stdio server
//! binary and the in-process [`LocalBridge`](crate::views::bridge::LocalBridge),
//! and is unit-tested directly.
//!
//! Parameter names follow the desktop UI (`hasNumbers`, `hasSymbols`); the
//! snake_case spellings are accepted too.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::app::App;
use crate::managers::note_manager::{NoteManager, NoteManagerTrait};
use crate::managers::vault_manager::{VaultManager, VaultManagerTrait};
use crate::services::network_info::NetworkInfoTrait;
use crate::services::password_generator::PasswordGeneratorTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::system_stats::SystemStatsTrait;
use crate::types::credential::PasswordGenOptions;

/// Looks up the first of `names` present in `params`.
fn param<'a>(params: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|n| params.get(*n))
}

fn str_param<'a>(params: &'a Value, names: &[&str]) -> Result<&'a str, String> {
    param(params, names)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", names[0]))
}

fn int_param(params: &Value, names: &[&str]) -> Result<i64, String> {
    param(params, names)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| format!("missing {}", names[0]))
}

fn bool_param(params: &Value, names: &[&str], default: bool) -> bool {
    param(params, names).and_then(|v| v.as_bool()).unwrap_or(default)
}

/// Dispatch a command to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message
/// suitable for showing to the user.
///
/// `set_setting` persists the change and pushes `generator.*` and `network.*`
/// into the running services. The command server also picks up
/// `rpc.max_requests_per_second` immediately. `logging.level` and
/// `dashboard.stats_interval_ms` apply on the next start (or the next poller
/// spawn).
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "dispatching command");
    let result = dispatch(app, method, params);
    if let Err(ref e) = result {
        warn!(method, error = %e, "command failed");
    }
    result
}

fn dispatch(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Dashboard ───
        "get_system_stats" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let stats = a.system_stats.sample();
            Ok(json!(stats.summary()))
        }

        // ─── Notes ───
        "get_notes" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = NoteManager::new(a.db.connection());
            let notes = mgr.list_notes().map_err(|e| e.to_string())?;
            let arr: Vec<Value> = notes.iter().map(|n| json!({"id": n.id, "content": n.content})).collect();
            Ok(json!(arr))
        }
        "add_note" => {
            let text = str_param(params, &["text", "content"])?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = NoteManager::new(a.db.connection());
            let note = mgr.add_note(text).map_err(|e| e.to_string())?;
            Ok(json!({"id": note.id, "content": note.content}))
        }
        "delete_note" => {
            let id = int_param(params, &["id"])?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = NoteManager::new(a.db.connection());
            mgr.remove_note(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Vault ───
        "get_password_entries" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = VaultManager::new(a.db.connection());
            let entries = mgr.list_entries().map_err(|e| e.to_string())?;
            let arr: Vec<Value> = entries
                .iter()
                .map(|e| json!({"id": e.id, "service": e.service, "username": e.username, "password": e.password}))
                .collect();
            Ok(json!(arr))
        }
        "add_password_entry" => {
            let service = str_param(params, &["service"])?;
            let password = str_param(params, &["password"])?;
            let username = param(params, &["username"]).and_then(|v| v.as_str()).unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = VaultManager::new(a.db.connection());
            let id = mgr.add_entry(service, username, password).map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "service": service, "username": username, "password": password}))
        }
        "delete_password_entry" => {
            let id = int_param(params, &["id"])?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mut mgr = VaultManager::new(a.db.connection());
            mgr.remove_entry(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Generator ───
        "generate_password" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let length = match param(params, &["length"]) {
                Some(v) => v.as_i64().ok_or("invalid length: expected an integer")?,
                None => a.settings().generator.default_length,
            };
            let options = PasswordGenOptions::new(
                length,
                bool_param(params, &["hasNumbers", "has_numbers"], true),
                bool_param(params, &["hasSymbols", "has_symbols"], true),
            );
            let password = a.generator.generate(&options).map_err(|e| e.to_string())?;
            Ok(json!(password))
        }

        // ─── Remote ───
        "get_my_ip" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let ip = a.network_info.my_ip().map_err(|e| e.to_string())?;
            Ok(json!(ip))
        }

        // ─── Settings ───
        "get_settings" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings()).map_err(|e| e.to_string())
        }
        "set_setting" => {
            let key = str_param(params, &["key"])?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
