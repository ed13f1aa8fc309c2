use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Error initializing SDL2: {0}")]
    SdlInit(String),
    #[error("Error initializing SDL2 video subsystem: {0}")]
    SdlVideoInit(String),
    #[error("Error initializing SDL2 joystick subsystem: {0}")]
    SdlJoystickInit(String),
    #[error("Error initializing SDL2 event pump: {0}")]
    SdlEventPumpInit(String),
    #[error("Error creating SDL2 window: {0}")]
    SdlCreateWindow(#[from] sdl2::video::WindowBuildError),
    #[error("Error reading config file '{}': {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing config file '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unknown device '{name}' (available: {available})")]
    UnknownDevice { name: String, available: String },
    #[error("Unknown button name '{0}' in key bindings")]
    UnknownButton(String),
    #[error("Unknown key name '{0}' in key bindings")]
    UnknownKey(String),
}
