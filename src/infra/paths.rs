// src/infra/paths.rs — XDG-compliant path management
//
// All paths respect the FOLIO_HOME environment variable for isolation.
// When FOLIO_HOME is set, config and data live under that directory.
// When unset, config uses ~/.folio/ and data uses XDG_DATA_HOME/folio.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<Option<ProjectDirs>> = OnceLock::new();

fn project_dirs() -> Option<&'static ProjectDirs> {
    PROJECT_DIRS
        .get_or_init(|| ProjectDirs::from("", "", "folio"))
        .as_ref()
}

fn folio_home() -> Option<PathBuf> {
    std::env::var_os("FOLIO_HOME").map(PathBuf::from)
}

/// Home directory, or the working directory when no home can be determined.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $FOLIO_HOME/ or ~/.folio/
pub fn config_dir() -> PathBuf {
    if let Some(home) = folio_home() {
        return home;
    }
    dirs_home().join(".folio")
}

/// Data directory: $FOLIO_HOME/data/ or ~/.local/share/folio/
pub fn data_dir() -> PathBuf {
    if let Some(home) = folio_home() {
        return home.join("data");
    }
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Log file used while the TUI owns the terminal.
pub fn log_file_path() -> PathBuf {
    data_dir().join("folio.log")
}
