//! Where keymap-fmt keeps its optional config file and logs

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "keymap-fmt";

/// `$XDG_CONFIG_HOME/keymap-fmt`, falling back to `~/.config/keymap-fmt`
/// (`%APPDATA%\keymap-fmt` on Windows)
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

/// Optional formatter settings, see [`crate::config::FormatterConfig`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Daily rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "no config directory available".to_string())?;
    create_dir(&logs)?;
    Ok(logs)
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path).map_err(|e| format!("cannot create {}: {}", path.display(), e))
}
