//! Frontend settings file (TOML).
//!
//! ```toml
//! device = "gcw-zero"
//! fast_forward_target = 1
//!
//! [analog]
//! sensitivity = 3
//! action = 1
//!
//! [keys]
//! FaceRight = "Space"
//! AnalogUp = "I"
//! ```
//!
//! Every field is optional. `[keys]` maps button names to SDL scancode
//! names and overrides the defaults for the listed buttons only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use handpad_core::input::{AnalogConfig, DeviceProfile};
use handpad_core::session::InputConfig;
use serde::Deserialize;

use crate::error::FrontendError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub device: String,
    pub fast_forward_target: u8,
    /// `sensitivity` 0 (least) to 4, saturating; `action` 0 = stick only
    /// for hotkeys/menu, 1 = stick is also the d-pad.
    pub analog: AnalogConfig,
    pub keys: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: String::from("gcw-zero"),
            fast_forward_target: 0,
            analog: AnalogConfig::default(),
            keys: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Input configuration for `device` with these settings applied.
    pub fn input_config(&self, device: DeviceProfile) -> InputConfig {
        let mut config = InputConfig::new(device);
        config.analog = self.analog;
        config
    }
}

/// `<config dir>/handpad/handpad.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("handpad").join("handpad.toml"))
}

/// Load settings from `path`, or from [`default_path`] when `path` is
/// `None`. A missing default file yields defaults; a missing explicit file
/// is an error.
pub fn load(path: Option<&Path>) -> Result<Settings, FrontendError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Settings::default()),
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|source| FrontendError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let settings = parse(&text).map_err(|source| FrontendError::ParseConfig {
        path: path.clone(),
        source,
    })?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

fn parse(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
}
