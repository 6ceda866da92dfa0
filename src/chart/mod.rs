// src/chart/mod.rs
//
// Renderer-independent chart descriptions. The builders in `timeseries` and
// `scatter` are pure functions over the dataset and the current selection;
// `ui::charts` turns the descriptions into egui_plot items.
pub mod scatter;
pub mod timeseries;

pub use scatter::ScatterChart;
pub use timeseries::TimeSeriesChart;

pub type Rgb = [u8; 3];

pub const ORANGE: Rgb = [255, 165, 0];
pub const GRAY: Rgb = [128, 128, 128];
pub const LIGHT_GRAY: Rgb = [211, 211, 211];
pub const POINT_BLUE: Rgb = [31, 120, 180]; // #1f78b4

/// Which vertical scale a time-series line is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueAxis {
    Price,
    Sales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// Currency with two decimals, e.g. `$1.60`.
    Currency,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    BottomRight,
    TopRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub format: TickFormat,
    /// Fixed [min, max] when present; otherwise the renderer fits to data.
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub axis: ValueAxis,
    pub points: Vec<[f64; 2]>,
    pub color: Rgb,
    pub width: f32,
    pub alpha: f32,
    pub dashed: bool,
}
