// src/state/mod.rs
use std::collections::BTreeSet;

/// The 42 states present in the dataset, in fixed display order.
pub const STATE_CODES: [&str; 42] = [
    "AL", "AR", "AZ", "CO", "CT", "DC", "DE", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT",
    "NC", "NE", "NH", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VA", "VT",
];

pub const DEFAULT_STATE: &str = "VT";

// Control-change events reported by the controls panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    States,
    AverageToggle,
    RegressionToggle,
}

/// How much of the displayed chart pair a change batch invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildScope {
    None,
    TimeSeries,
    Both,
}

impl RebuildScope {
    pub fn widen(self, other: RebuildScope) -> RebuildScope {
        match (self, other) {
            (RebuildScope::Both, _) | (_, RebuildScope::Both) => RebuildScope::Both,
            (RebuildScope::TimeSeries, _) | (_, RebuildScope::TimeSeries) => {
                RebuildScope::TimeSeries
            }
            _ => RebuildScope::None,
        }
    }
}

/// The user's current control choices. Mutated only inside the controls
/// panel's event handling; the chart builders take it by shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected_states: BTreeSet<String>,
    pub show_average: bool,
    pub show_regression: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_states: BTreeSet::from([DEFAULT_STATE.to_string()]),
            show_average: true,
            show_regression: true,
        }
    }
}

impl SelectionState {
    pub fn is_selected(&self, code: &str) -> bool {
        self.selected_states.contains(code)
    }

    /// Adds or removes a state. Codes outside STATE_CODES are ignored, so
    /// `selected_states` stays a subset of the published option list.
    pub fn toggle_state(&mut self, code: &str) {
        if !STATE_CODES.contains(&code) {
            return;
        }
        if !self.selected_states.remove(code) {
            self.selected_states.insert(code.to_string());
        }
    }
}
