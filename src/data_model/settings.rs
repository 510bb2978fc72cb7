use crate::config::{OutputFormat, UtcOffset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub command: Command,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Watch(WatchSettings),
    Convert {
        time: String,
        format: OutputFormat,
    },
    Svg {
        time: String,
        width: u32,
        output: Option<PathBuf>,
    },
}

/// Overrides for the persisted display config; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchSettings {
    pub refresh_hz: Option<u16>,
    pub utc_offset: Option<UtcOffset>,
    pub show_text_clock: Option<bool>,
}
