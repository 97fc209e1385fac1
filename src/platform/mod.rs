// GlassDesk platform paths
// Config and data locations for Windows, macOS and Linux, selected with
// `cfg(target_os)` at compile time.

use std::env;
use std::path::PathBuf;

const APP_DIR_UNIX: &str = "glassdesk";
const APP_DIR_NAMED: &str = "GlassDesk";

/// Environment variable that overrides the data directory (database location).
pub const DATA_DIR_ENV: &str = "GLASSDESK_DATA_DIR";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/glassdesk` or `~/.config/glassdesk`
/// - **macOS**: `~/Library/Application Support/GlassDesk`
/// - **Windows**: `%APPDATA%/GlassDesk`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR_NAMED)
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR_NAMED)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR_UNIX),
            Err(_) => home_dir().join(".config").join(APP_DIR_UNIX),
        }
    }
}

/// Returns the platform-specific data directory.
///
/// `GLASSDESK_DATA_DIR` wins when set. Otherwise:
/// - **Linux**: `$XDG_DATA_HOME/glassdesk` or `~/.local/share/glassdesk`
/// - **macOS / Windows**: same as the config directory
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        get_config_dir()
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR_UNIX),
            Err(_) => home_dir().join(".local").join("share").join(APP_DIR_UNIX),
        }
    }
}

/// Default SQLite database path inside the data directory.
pub fn default_db_path() -> PathBuf {
    get_data_dir().join("glassdesk.db")
}
