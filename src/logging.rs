//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

const FALLBACK_LEVEL: &str = "info";

/// Installs a compact stderr subscriber. `RUST_LOG` overrides `default_level`.
///
/// Stdout is reserved for protocol output, so nothing is logged there.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .with(filter)
        .try_init();
}

/// Reads the configured level before the app is built, so that startup and
/// migration logs are not lost. Unreadable settings fall back to `info`; the
/// real error surfaces when the app loads them again.
pub fn startup_level(engine: &mut SettingsEngine) -> String {
    match engine.load() {
        Ok(settings) => settings.logging.level,
        Err(_) => FALLBACK_LEVEL.to_string(),
    }
}
