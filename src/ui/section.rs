// src/ui/section.rs
use eframe::egui::{self, Color32, RichText};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::analysis::{AtsReport, ScoreTier};
use crate::render::SectionView;
use crate::state::RenderedSection;
use crate::ui::json_tree::show_json_tree;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerKind {
    Warning,
    Danger,
}

impl BannerKind {
    fn colors(self) -> (Color32, Color32) {
        match self {
            BannerKind::Warning => (Color32::from_rgb(255, 243, 205), Color32::from_rgb(102, 77, 3)),
            BannerKind::Danger => (Color32::from_rgb(248, 215, 218), Color32::from_rgb(132, 32, 41)),
        }
    }
}

pub fn banner(ui: &mut egui::Ui, kind: BannerKind, text: &str) {
    let (fill, text_color) = kind.colors();
    egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(egui::Label::new(RichText::new(text).color(text_color)).wrap(true));
        });
}

/// Badge fill and text color for a score tier.
pub fn tier_colors(tier: ScoreTier) -> (Color32, Color32) {
    match tier {
        ScoreTier::Success => (Color32::from_rgb(25, 135, 84), Color32::WHITE),
        ScoreTier::Warning => (Color32::from_rgb(255, 193, 7), Color32::BLACK),
        ScoreTier::Danger => (Color32::from_rgb(220, 53, 69), Color32::WHITE),
    }
}

pub fn show_section(ui: &mut egui::Ui, section: &RenderedSection, markdown: &mut CommonMarkCache) {
    match &section.view {
        SectionView::Warning(text) => banner(ui, BannerKind::Warning, text),
        SectionView::Markdown(text) => {
            CommonMarkViewer::new(("markdown", &section.key)).show(ui, markdown, text);
        }
        SectionView::Ats(report) => show_ats_report(ui, report),
        SectionView::JsonTree(value) => show_json_tree(ui, &section.key, value),
        SectionView::Verbatim(text) => show_verbatim(ui, text),
    }
}

fn show_ats_report(ui: &mut egui::Ui, report: &AtsReport) {
    let (fill, text_color) = tier_colors(report.tier());

    ui.horizontal(|ui| {
        ui.heading("ATS Score:");
        egui::Frame::none()
            .fill(fill)
            .rounding(4.0)
            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
            .show(ui, |ui| {
                ui.label(RichText::new(&report.score_label).strong().size(16.0).color(text_color));
            });
    });

    ui.add_space(12.0);
    ui.strong("✔️ Strengths");
    for strength in &report.strengths {
        ui.label(format!("• {}", strength));
    }

    ui.add_space(12.0);
    ui.strong("📉 Suggestions");
    for suggestion in &report.suggestions {
        ui.label(format!("• {}", suggestion));
    }
}

fn show_verbatim(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(4.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(egui::Label::new(RichText::new(text).monospace()).wrap(true));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text_is_readable() {
        assert_eq!(tier_colors(ScoreTier::Warning).1, Color32::BLACK);
        assert_eq!(tier_colors(ScoreTier::Success).1, Color32::WHITE);
        assert_ne!(tier_colors(ScoreTier::Success).0, tier_colors(ScoreTier::Danger).0);
    }
}
