//! Per-user data directory for ecweb.
//!
//! - macOS: ~/Library/Application Support/ecweb
//! - Linux: $XDG_DATA_HOME/ecweb or ~/.local/share/ecweb
//! - Windows: %APPDATA%\ecweb

use std::path::PathBuf;

const APP_NAME: &str = "ecweb";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// Create the log directory if needed. Falls back to the temp dir when no
/// data directory can be determined.
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().unwrap_or_else(|| std::env::temp_dir().join(APP_NAME).join(LOG_DIR));
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
