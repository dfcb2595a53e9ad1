// src/file/export.rs
use super::FileHandler;
use std::fs;
use std::path::Path;
use anyhow::{Result, Context};

/// Name offered in the save dialog for a section download.
pub fn export_file_name(section_key: &str) -> String {
    format!("{}.txt", section_key)
}

/// Writes a section payload byte-for-byte, no reformatting.
#[derive(Debug)]
pub struct SectionExportHandler;

impl SectionExportHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<String> for SectionExportHandler {
    fn load(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read export {}", path.display()))
    }

    fn save(&self, data: &String, path: &Path) -> Result<()> {
        fs::write(path, data.as_bytes())
            .with_context(|| format!("Failed to write export {}", path.display()))
    }
}
