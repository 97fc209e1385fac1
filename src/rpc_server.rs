//! GlassDesk command server: newline-delimited JSON over stdin/stdout.
//!
//! Request:  {"id":1, "method":"add_note", "params":{"text":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol lines.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{error, info, warn};

use glassdesk::app::App;
use glassdesk::logging;
use glassdesk::platform;
use glassdesk::rpc_handler::handle_method;
use glassdesk::services::settings_engine::SettingsEngine;

/// Fixed one-second window request limiter.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    fn set_limit(&mut self, max_per_second: u32) {
        self.max_per_second = max_per_second;
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    logging::init(&logging::startup_level(&mut settings_engine));

    let db_path = platform::default_db_path();
    let app = match App::with_settings(&db_path.to_string_lossy(), settings_engine) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize");
            return Err(e);
        }
    };
    let mut rate_limiter = RateLimiter::new(app.settings().rpc.max_requests_per_second);
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;
    info!(db = %db_path.display(), "command server ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                emit(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            warn!("rate limit exceeded");
            emit(&mut out, &json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => {
                if method == "set_setting" {
                    if let Ok(a) = app.lock() {
                        rate_limiter.set_limit(a.settings().rpc.max_requests_per_second);
                    }
                }
                json!({"id": id, "result": val})
            }
            Err(err) => json!({"id": id, "error": err}),
        };
        emit(&mut out, &response)?;
    }

    info!("command server shutting down");
    Ok(())
}
