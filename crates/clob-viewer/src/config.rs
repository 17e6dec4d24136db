// crates/clob-viewer/src/config.rs

//! Viewer configuration, read from an optional TOML file.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! price_precision = 2
//! volume_precision = 8
//! spacing = 1
//! refresh_secs = 5
//! orientation = "side_by_side"
//! alignment = "bar_right"
//!
//! [theme]
//! bid_bg = "28"
//! ask_bg = "#c2185b"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clob_core::{Alignment, Orientation};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme.{field}: {value:?} is not a color")]
    Color { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub price_precision: usize,
    pub volume_precision: usize,
    pub spacing: usize,
    /// Re-read the snapshot file every this many seconds.
    pub refresh_secs: Option<u64>,
    /// Initial orientation of the snapshot panel.
    pub orientation: OrientationSetting,
    /// Initial bar alignment of stacked views.
    pub alignment: AlignmentSetting,
    pub theme: Theme,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            price_precision: 2,
            volume_precision: 8,
            spacing: 1,
            refresh_secs: None,
            orientation: OrientationSetting::SideBySide,
            alignment: AlignmentSetting::BarLeft,
            theme: Theme::default(),
        }
    }
}

impl ViewerConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationSetting {
    #[default]
    SideBySide,
    Stacked,
}

impl From<OrientationSetting> for Orientation {
    fn from(setting: OrientationSetting) -> Self {
        match setting {
            OrientationSetting::SideBySide => Orientation::SideBySide,
            OrientationSetting::Stacked => Orientation::Stacked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentSetting {
    #[default]
    BarLeft,
    BarRight,
}

impl From<AlignmentSetting> for Alignment {
    fn from(setting: AlignmentSetting) -> Self {
        match setting {
            AlignmentSetting::BarLeft => Alignment::BarLeft,
            AlignmentSetting::BarRight => Alignment::BarRight,
        }
    }
}

/// Colors for the three text roles. Values are color names, `#rrggbb`
/// or 256-color indices.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Text outside the bars.
    pub off_bar_fg: String,
    /// Text inside the bars.
    pub bar_fg: String,
    pub bid_bg: String,
    pub ask_bg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            off_bar_fg: "188".to_string(),
            bar_fg: "228".to_string(),
            bid_bg: "28".to_string(),
            ask_bg: "197".to_string(),
        }
    }
}
