// src/file/settings.rs
use super::FileHandler;
use crate::config::Settings;
use std::fs;
use std::path::Path;
use anyhow::{Result, Context};

#[derive(Debug)]
pub struct SettingsFileHandler;

impl SettingsFileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Writes the defaults so users have a file to edit; leaves an existing file alone.
    pub fn write_default_if_missing(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.save(&Settings::default(), path)?;
        Ok(true)
    }
}

impl FileHandler<Settings> for SettingsFileHandler {
    fn load(&self, path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)?;
        ron::from_str(&content).context("Failed to parse settings file")
    }

    fn save(&self, data: &Settings, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(2)
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
