use std::path::PathBuf;

use crate::constants::APP_DIR_NAME;

/// Per-user directory for persisted match data.
pub fn app_data_root() -> PathBuf {
    let base = std::env::var("LOCALAPPDATA")
        .or_else(|_| std::env::var("APPDATA"))
        .or_else(|_| std::env::var("XDG_DATA_HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join(APP_DIR_NAME)
}
