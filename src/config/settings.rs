// src/config/settings.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const ENV_PREFIX: &str = "RESUME_ASSISTANT";
const APP_DIR: &str = "resume-assistant";
const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub backend_url: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl Settings {
    /// `<config_dir>/resume-assistant/settings.ron`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Defaults, then the settings file (if present), then `RESUME_ASSISTANT_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, ::config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: ::config::Environment) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = ::config::Config::builder()
            .set_default("backend_url", defaults.backend_url)?
            .set_default("window_width", defaults.window_width as f64)?
            .set_default("window_height", defaults.window_height as f64)?;

        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Ron)
                    .required(false),
            );
        }

        builder
            .add_source(env)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}
