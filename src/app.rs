// src/app.rs
use eframe::egui;

use crate::chart::{scatter, timeseries, ScatterChart, TimeSeriesChart};
use crate::data::Dataset;
use crate::state::{RebuildScope, SelectionChange, SelectionState};

pub struct DashboardApp {
    dataset: Dataset,
    selection: SelectionState,
    time_series: TimeSeriesChart,
    scatter: ScatterChart,
}

impl DashboardApp {
    pub fn new(dataset: Dataset) -> Self {
        let selection = SelectionState::default();
        let time_series = timeseries::build(&dataset, &selection);
        let scatter = scatter::build(&dataset, &selection);
        Self {
            dataset,
            selection,
            time_series,
            scatter,
        }
    }

    /// Handles one batch of control changes: the rule table picks a scope
    /// and the cached chart descriptions are replaced accordingly. Each
    /// batch is handled to completion before the next frame's events.
    fn apply_changes(&mut self, changes: &[SelectionChange]) {
        match rebuild_scope(changes) {
            RebuildScope::None => {}
            RebuildScope::TimeSeries => {
                log::debug!("rebuilding time series chart");
                self.time_series = timeseries::build(&self.dataset, &self.selection);
            }
            RebuildScope::Both => {
                log::debug!(
                    "rebuilding both charts for {} selected states",
                    self.selection.selected_states.len()
                );
                self.time_series = timeseries::build(&self.dataset, &self.selection);
                self.scatter = scatter::build(&self.dataset, &self.selection);
            }
        }
    }
}

/// Single rule table mapping control changes to how much gets rebuilt. A
/// batch touching only the average toggle repaints just the time series;
/// anything touching the state list or the regression toggle replaces both
/// charts. Mixed batches coalesce to the widest requested scope.
pub fn rebuild_scope(changes: &[SelectionChange]) -> RebuildScope {
    changes.iter().fold(RebuildScope::None, |scope, change| {
        scope.widen(match change {
            SelectionChange::AverageToggle => RebuildScope::TimeSeries,
            SelectionChange::States | SelectionChange::RegressionToggle => RebuildScope::Both,
        })
    })
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changes = Vec::new();

        egui::SidePanel::left("controls_panel")
            .default_width(180.0)
            .show(ctx, |ui| {
                changes = crate::ui::controls::draw_controls(ui, &mut self.selection);
            });

        self.apply_changes(&changes);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                crate::ui::charts::draw_time_series(ui, &self.time_series);
                ui.add_space(16.0);
                crate::ui::charts::draw_scatter(ui, &self.scatter);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ValueAxis;
    use crate::data;
    use crate::state::SelectionChange::{AverageToggle, RegressionToggle, States};

    #[test]
    fn rule_table_maps_changes_to_scopes() {
        assert_eq!(rebuild_scope(&[]), RebuildScope::None);
        assert_eq!(rebuild_scope(&[AverageToggle]), RebuildScope::TimeSeries);
        assert_eq!(rebuild_scope(&[States]), RebuildScope::Both);
        assert_eq!(rebuild_scope(&[RegressionToggle]), RebuildScope::Both);
        assert_eq!(
            rebuild_scope(&[AverageToggle, RegressionToggle]),
            RebuildScope::Both
        );
        assert_eq!(rebuild_scope(&[AverageToggle, States]), RebuildScope::Both);
    }

    #[test]
    fn startup_charts_match_the_default_selection() {
        let app = DashboardApp::new(data::sample());

        // Default selection is VT with both toggles on: two average series
        // plus one price and one sales line for VT.
        assert_eq!(app.time_series.series.len(), 4);
        let dashed = app.time_series.series.iter().filter(|s| s.dashed).count();
        assert_eq!(dashed, 2);
        assert!(app
            .time_series
            .series
            .iter()
            .any(|s| s.axis == ValueAxis::Price && !s.dashed));

        // VT has three complete rows, enough for a fit line.
        assert_eq!(app.scatter.points.len(), 3);
        assert!(app.scatter.points.iter().all(|p| p.state == "VT"));
        assert!(app.scatter.fit_line.is_some());
    }

    #[test]
    fn selection_change_replaces_both_charts() {
        let mut app = DashboardApp::new(data::sample());
        app.selection.toggle_state("NH");
        app.apply_changes(&[States]);

        assert_eq!(app.time_series.series.len(), 6);
        assert_eq!(app.scatter.points.len(), 5);
    }

    #[test]
    fn average_toggle_only_rebuilds_the_time_series() {
        let mut app = DashboardApp::new(data::sample());
        let scatter_before = app.scatter.clone();

        app.selection.show_average = false;
        app.apply_changes(&[AverageToggle]);

        assert_eq!(app.time_series.series.len(), 2);
        assert_eq!(app.scatter, scatter_before);
    }

    #[test]
    fn regression_toggle_removes_the_fit_line() {
        let mut app = DashboardApp::new(data::sample());
        assert!(app.scatter.fit_line.is_some());

        app.selection.show_regression = false;
        app.apply_changes(&[RegressionToggle]);
        assert!(app.scatter.fit_line.is_none());
    }

    #[test]
    fn rebuild_with_unchanged_state_is_a_fixed_point() {
        let mut app = DashboardApp::new(data::sample());
        let time_series = app.time_series.clone();
        let scatter = app.scatter.clone();

        app.apply_changes(&[States, AverageToggle, RegressionToggle]);

        assert_eq!(app.time_series, time_series);
        assert_eq!(app.scatter, scatter);
    }
}
