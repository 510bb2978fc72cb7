use crate::config::DisplayConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STATE_FILE_VERSION: &str = "1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: String,
    pub display: DisplayConfig,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: STATE_FILE_VERSION.to_string(),
            display: DisplayConfig::default(),
        }
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("berlinuhr"))
}

fn state_file_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("state.json"))
}

pub fn load() -> PersistedState {
    match state_file_path() {
        Some(path) => load_from(&path),
        None => PersistedState::default(),
    }
}

pub fn load_from(path: &Path) -> PersistedState {
    if !path.exists() {
        return PersistedState::default();
    }

    match fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str::<PersistedState>(&content).ok())
    {
        Some(state) if state.display.refresh_hz > 0 => state,
        _ => {
            tracing::warn!(path = %path.display(), "ignoring unreadable state file");
            PersistedState::default()
        }
    }
}

pub fn save(state: &PersistedState) -> io::Result<()> {
    let Some(path) = state_file_path() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine state file path",
        ));
    };
    save_to(state, &path)
}

pub fn save_to(state: &PersistedState, path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    let content = serde_json::to_string_pretty(state)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "saved display settings");
    Ok(())
}
