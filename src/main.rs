// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod analysis;
mod app;
mod client;
mod config;
mod file;
mod render;
mod state;
mod ui;
mod utils;

use app::ResumeApp;
use client::BackendClient;
use crate::config::Settings;
use file::SettingsFileHandler;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings_path = Settings::default_path();
    if let Some(path) = &settings_path {
        match SettingsFileHandler::new().write_default_if_missing(path) {
            Ok(true) => info!(path = %path.display(), "wrote default settings"),
            Ok(false) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "could not write default settings"),
        }
    }

    let settings = Settings::load(settings_path.as_deref()).unwrap_or_else(|e| {
        warn!(error = %format!("{:#}", e), "using default settings");
        Settings::default()
    });
    info!(backend = %settings.backend_url, "settings loaded");

    let client = BackendClient::new(&settings.backend_url)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Resume Assistant"),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Assistant",
        options,
        Box::new(move |_cc| Box::new(ResumeApp::new(client))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
