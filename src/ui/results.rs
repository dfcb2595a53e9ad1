// src/ui/results.rs
use eframe::egui;
use egui_commonmark::CommonMarkCache;

use crate::state::AppState;
use crate::ui::section::{banner, show_section, BannerKind};

/// A user asked to save one section's raw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub key: String,
    pub payload: String,
}

/// Error banner or tabs, never both. Returns a download request if one was clicked.
pub fn show_results_view(
    ui: &mut egui::Ui,
    state: &mut AppState,
    markdown: &mut CommonMarkCache,
) -> Option<DownloadRequest> {
    if let Some(message) = state.error_banner() {
        banner(ui, BannerKind::Danger, message);
        return None;
    }

    if state.sections().is_empty() {
        return None;
    }

    let mut download = None;

    // Tabs
    let mut selected = None;
    ui.horizontal_wrapped(|ui| {
        for section in state.sections() {
            if ui
                .selectable_label(state.active_tab == section.key, &section.label)
                .clicked()
            {
                selected = Some(section.key.clone());
            }
        }
    });
    if let Some(key) = selected {
        state.active_tab = key;
    }

    ui.separator();
    ui.add_space(8.0);

    if let Some(section) = state.active_section() {
        egui::ScrollArea::vertical()
            .id_source(("section_scroll", &section.key))
            .auto_shrink([false, true])
            .max_height((ui.available_height() - 40.0).max(120.0))
            .show(ui, |ui| {
                show_section(ui, section, markdown);
            });

        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.small_button("⬇️ Download").clicked() {
                download = Some(DownloadRequest {
                    key: section.key.clone(),
                    payload: section.payload.clone(),
                });
            }
        });
    }

    download
}
