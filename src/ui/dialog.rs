// src/ui/dialog.rs
use eframe::egui;

/// Modal-style message window; closing it clears `message`.
pub fn show_message_window(ctx: &egui::Context, title: &str, message: &mut Option<String>) {
    let Some(text) = message.clone() else {
        return;
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&text);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                *message = None;
            }
        });
}
