// src/ui/json_tree.rs
use eframe::egui;
use serde_json::Value;

/// Collapsible tree for a JSON document. The root itself is not named;
/// its children are listed directly, all expanded.
pub fn show_json_tree(ui: &mut egui::Ui, id_source: &str, value: &Value) {
    let root = egui::Id::new(("json_tree", id_source));
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                show_node(ui, root.with(key), key, child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                show_node(ui, root.with(index), &index.to_string(), child);
            }
        }
        leaf => {
            ui.horizontal(|ui| {
                ui.label(leaf_text(leaf));
                copy_button(ui, leaf);
            });
        }
    }
}

fn show_node(ui: &mut egui::Ui, id: egui::Id, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            show_container(ui, id, key, value, |ui| {
                for (child_key, child) in map {
                    show_node(ui, id.with(child_key), child_key, child);
                }
            });
        }
        Value::Array(items) => {
            show_container(ui, id, key, value, |ui| {
                for (index, child) in items.iter().enumerate() {
                    show_node(ui, id.with(index), &index.to_string(), child);
                }
            });
        }
        leaf => {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(format!("{}:", key)).strong());
                ui.label(leaf_text(leaf));
                copy_button(ui, leaf);
            });
        }
    }
}

fn show_container(
    ui: &mut egui::Ui,
    id: egui::Id,
    key: &str,
    value: &Value,
    add_children: impl FnOnce(&mut egui::Ui),
) {
    egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, true)
        .show_header(ui, |ui| {
            ui.label(egui::RichText::new(format!("{}:", key)).strong());
            ui.weak(container_summary(value));
            copy_button(ui, value);
        })
        .body(add_children);
}

fn copy_button(ui: &mut egui::Ui, value: &Value) {
    if ui.small_button("📋").on_hover_text("Copy").clicked() {
        let text = clipboard_text(value);
        ui.output_mut(|o| o.copied_text = text);
    }
}

pub fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

pub fn container_summary(value: &Value) -> String {
    let count = match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => return String::new(),
    };
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Strings copy without quotes; everything else as pretty JSON.
pub fn clipboard_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_text() {
        assert_eq!(leaf_text(&json!("Rust")), "\"Rust\"");
        assert_eq!(leaf_text(&json!(3)), "3");
        assert_eq!(leaf_text(&json!(null)), "null");
        assert_eq!(leaf_text(&json!(true)), "true");
    }

    #[test]
    fn test_container_summary() {
        assert_eq!(container_summary(&json!({"a": 1})), "1 item");
        assert_eq!(container_summary(&json!([1, 2, 3])), "3 items");
        assert_eq!(container_summary(&json!([])), "0 items");
        assert_eq!(container_summary(&json!("x")), "");
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(clipboard_text(&json!("Senior Engineer")), "Senior Engineer");
        assert_eq!(clipboard_text(&json!(["a"])), "[\n  \"a\"\n]");
        assert_eq!(clipboard_text(&json!(42)), "42");
    }
}
