// src/ui/upload.rs
use eframe::egui;
use crate::state::{AppState, RunState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadAction {
    None,
    ChooseFile,
    Run,
}

pub fn show_upload_panel(ui: &mut egui::Ui, state: &AppState) -> UploadAction {
    let mut action = UploadAction::None;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label("Upload Resume (PDF)");
        ui.horizontal(|ui| {
            if ui.button("📂 Choose File...").clicked() {
                action = UploadAction::ChooseFile;
            }
            match &state.selected_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name).on_hover_text(path.display().to_string());
                }
                None => {
                    ui.weak("No file chosen");
                }
            }
        });
    });

    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        let loading = state.is_loading();
        let clicked = ui
            .add_enabled_ui(!loading, |ui| {
                if loading {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.button("Processing...").clicked()
                    })
                    .inner
                } else {
                    ui.button("▶ Run Analysis").clicked()
                }
            })
            .inner;

        if clicked && !loading {
            action = UploadAction::Run;
        }

        if let RunState::Succeeded(run) = &state.run {
            ui.weak(format!("Completed at {}", run.finished_at.format("%H:%M:%S")));
        }
    });

    action
}
