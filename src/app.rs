//! App Core for GlassDesk.
//!
//! Central struct holding the database and every service the command
//! handlers need.

use tracing::info;

use crate::database::connection::Database;
use crate::services::network_info::NetworkInfo;
use crate::services::password_generator::PasswordGenerator;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::system_stats::SystemStatsService;
use crate::types::settings::AppSettings;

/// Central application struct. It is `Send`, so it can sit behind a
/// `Mutex` shared across threads; the connection is never shared otherwise.
///
/// NoteManager and VaultManager borrow the connection, so they are created
/// per call via `NoteManager::new(app.db.connection())`.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
    pub generator: PasswordGenerator,
    pub system_stats: SystemStatsService,
    pub network_info: NetworkInfo,
}

impl App {
    /// Opens the database at `db_path` and loads settings through
    /// `settings_engine`. The binaries pass `SettingsEngine::new(None)` for the
    /// platform config directory; tests point it at their own file.
    pub fn with_settings(
        db_path: &str,
        mut settings_engine: SettingsEngine,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Database::open(db_path)?;
        let settings = settings_engine
            .load()
            .map_err(|e| format!("SettingsEngine init failed: {}", e))?;

        info!(db_path, config = settings_engine.get_config_path(), "glassdesk initialized");

        Ok(Self {
            db,
            generator: PasswordGenerator::new(settings.generator.clone()),
            network_info: NetworkInfo::new(settings.network.clone()),
            system_stats: SystemStatsService::new(),
            settings_engine,
        })
    }

    pub fn settings(&self) -> &AppSettings {
        self.settings_engine.get_settings()
    }

    /// Pushes the current settings into the services that cache them.
    /// Called after a settings update.
    pub fn apply_settings(&mut self) {
        let settings = self.settings_engine.get_settings().clone();
        self.generator.set_settings(settings.generator);
        self.network_info.set_settings(settings.network);
    }
}
