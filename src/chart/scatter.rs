// src/chart/scatter.rs
use crate::analysis::{self, RegressionResult};
use crate::chart::{
    AxisSpec, LegendCorner, LineSeries, TickFormat, ValueAxis, LIGHT_GRAY, POINT_BLUE,
};
use crate::data::Dataset;
use crate::state::SelectionState;

/// The fit line is sampled at evenly spaced prices across this span.
pub const FIT_SAMPLE_RANGE: [f64; 2] = [1.20, 3.00];
pub const FIT_SAMPLES: usize = 10;

/// One marker in the point cloud, with its hover payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub state: String,
    pub year: i32,
    pub price: f64,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub points: Vec<ScatterPoint>,
    pub points_label: String,
    pub point_color: crate::chart::Rgb,
    pub point_alpha: f32,
    pub fit_line: Option<LineSeries>,
    pub legend: LegendCorner,
    /// Zero: the scatter draws with no grid lines.
    pub grid_alpha: f32,
}

/// Builds the price-vs-sales scatter for the current selection.
///
/// Rows missing either value are dropped from both the point cloud and the
/// regression input. With the toggle on, the fit line is drawn only when at
/// least two complete rows remain; otherwise it is skipped, not an error.
pub fn build(dataset: &Dataset, selection: &SelectionState) -> ScatterChart {
    let points: Vec<ScatterPoint> = dataset
        .state_years
        .iter()
        .filter(|row| selection.is_selected(&row.state))
        .filter_map(|row| match (row.adjusted_min_price, row.sales) {
            (Some(price), Some(sales)) => Some(ScatterPoint {
                state: row.state.clone(),
                year: row.year,
                price,
                sales,
            }),
            _ => None,
        })
        .collect();

    let fit_line = if selection.show_regression {
        let xs: Vec<f64> = points.iter().map(|p| p.price).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.sales).collect();
        match analysis::fit(&xs, &ys) {
            Ok(fit) => Some(sample_fit_line(&fit)),
            Err(e) => {
                log::debug!("skipping regression line: {}", e);
                None
            }
        }
    } else {
        None
    };

    ScatterChart {
        title: "Cigarette Sales vs. Price of Cigarette in the US from 1963 to 1992"
            .to_string(),
        x_axis: AxisSpec {
            label: "minimum price of cigarette pack (adjusted to 2016 USD)".to_string(),
            format: TickFormat::Currency,
            range: None,
        },
        y_axis: AxisSpec {
            label: "cigarette sales in packs per capita".to_string(),
            format: TickFormat::Plain,
            range: None,
        },
        points,
        points_label: "average consumption states".to_string(),
        point_color: POINT_BLUE,
        point_alpha: 0.5,
        fit_line,
        legend: LegendCorner::TopRight,
        grid_alpha: 0.0,
    }
}

fn sample_fit_line(fit: &RegressionResult) -> LineSeries {
    let [x0, x1] = FIT_SAMPLE_RANGE;
    let step = (x1 - x0) / (FIT_SAMPLES - 1) as f64;
    let points = (0..FIT_SAMPLES)
        .map(|i| {
            let x = x0 + step * i as f64;
            [x, fit.intercept + fit.slope * x]
        })
        .collect();

    LineSeries {
        name: "line of best fit average consumption states".to_string(),
        axis: ValueAxis::Sales,
        points,
        color: LIGHT_GRAY,
        width: 4.0,
        alpha: 1.0,
        dashed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn selection_of(codes: &[&str], show_regression: bool) -> SelectionState {
        SelectionState {
            selected_states: codes.iter().map(|c| c.to_string()).collect(),
            show_average: true,
            show_regression,
        }
    }

    #[test]
    fn incomplete_rows_are_dropped_from_the_point_cloud() {
        let dataset = data::sample();
        // VT has 4 rows, one missing sales; KY has 2 rows, one missing price.
        let chart = build(&dataset, &selection_of(&["VT", "KY"], false));
        assert_eq!(chart.points.len(), 4);
        assert!(chart
            .points
            .iter()
            .all(|p| p.price.is_finite() && p.sales.is_finite()));
    }

    #[test]
    fn tooltip_payload_carries_the_source_row() {
        let dataset = data::sample();
        let chart = build(&dataset, &selection_of(&["NH"], false));
        assert_eq!(
            chart.points[0],
            ScatterPoint {
                state: "NH".to_string(),
                year: 1963,
                price: 1.50,
                sales: 200.1,
            }
        );
    }

    #[test]
    fn fit_line_is_sampled_over_the_fixed_span() {
        let dataset = data::sample();
        let chart = build(&dataset, &selection_of(&["VT", "NH"], true));
        let line = chart.fit_line.expect("five complete rows fit a line");
        assert_eq!(line.points.len(), FIT_SAMPLES);
        assert!((line.points[0][0] - FIT_SAMPLE_RANGE[0]).abs() < 1e-9);
        assert!((line.points[FIT_SAMPLES - 1][0] - FIT_SAMPLE_RANGE[1]).abs() < 1e-9);

        // Every sample sits on y = intercept + slope * x for one (slope,
        // intercept) pair, i.e. the samples are collinear.
        let [x0, y0] = line.points[0];
        let [x1, y1] = line.points[FIT_SAMPLES - 1];
        let slope = (y1 - y0) / (x1 - x0);
        for &[x, y] in &line.points {
            assert!((y - (y0 + slope * (x - x0))).abs() < 1e-9);
        }
    }

    #[test]
    fn fewer_than_two_points_skips_the_line_without_failing() {
        let dataset = data::sample();
        // KY contributes a single complete row.
        let chart = build(&dataset, &selection_of(&["KY"], true));
        assert_eq!(chart.points.len(), 1);
        assert!(chart.fit_line.is_none());

        let empty = build(&dataset, &selection_of(&[], true));
        assert!(empty.points.is_empty());
        assert!(empty.fit_line.is_none());
    }

    #[test]
    fn toggle_off_omits_the_line() {
        let dataset = data::sample();
        let chart = build(&dataset, &selection_of(&["VT", "NH"], false));
        assert!(chart.fit_line.is_none());
    }

    #[test]
    fn unknown_states_filter_to_an_empty_cloud() {
        let dataset = data::sample();
        let chart = build(&dataset, &selection_of(&["WY"], true));
        assert!(chart.points.is_empty());
        assert!(chart.fit_line.is_none());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let dataset = data::sample();
        let selection = selection_of(&["VT", "NH", "KY"], true);
        assert_eq!(build(&dataset, &selection), build(&dataset, &selection));
    }
}
