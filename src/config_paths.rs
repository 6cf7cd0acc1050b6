//! Where todo-outline keeps its config file and logs
//!
//! Both live under the platform config directory reported by `dirs`:
//! `$XDG_CONFIG_HOME` or `~/.config` on Linux, `%APPDATA%` on Windows and
//! `~/Library/Application Support` on macOS.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const APP_DIR: &str = "todo-outline";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// `<config dir>/todo-outline`, looked up once per process
pub fn app_dir() -> Option<&'static Path> {
    static DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
    DIR.get_or_init(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)))
        .as_deref()
}

pub fn config_file() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = app_dir()
        .map(|dir| dir.join(LOGS_DIR))
        .ok_or("no config directory available")?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("cannot create {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_sits_in_app_dir() {
        let Some(dir) = app_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(dir.join("config.yaml")));
    }

    #[test]
    fn test_app_dir_is_stable() {
        assert_eq!(app_dir(), app_dir());
    }
}
