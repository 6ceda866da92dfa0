// src/ui/controls.rs
use eframe::egui;

use crate::state::{SelectionChange, SelectionState, STATE_CODES};

/// Draws the controls panel and mutates `selection` in place. This is the
/// only place the selection state changes; every actual change is reported
/// back so the controller can decide what to rebuild.
pub fn draw_controls(ui: &mut egui::Ui, selection: &mut SelectionState) -> Vec<SelectionChange> {
    let mut changes = Vec::new();

    ui.heading("States");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_source("state_multi_select")
        .max_height(ui.available_height() * 0.7)
        .show(ui, |ui| {
            for code in STATE_CODES {
                let selected = selection.is_selected(code);
                if ui.selectable_label(selected, code).clicked() {
                    selection.toggle_state(code);
                    changes.push(SelectionChange::States);
                }
            }
        });

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    if ui
        .checkbox(&mut selection.show_average, "show US average")
        .changed()
    {
        changes.push(SelectionChange::AverageToggle);
    }
    if ui
        .checkbox(&mut selection.show_regression, "show regression line")
        .changed()
    {
        changes.push(SelectionChange::RegressionToggle);
    }

    changes
}
