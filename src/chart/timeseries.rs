// src/chart/timeseries.rs
use crate::chart::{AxisSpec, LegendCorner, LineSeries, TickFormat, ValueAxis, GRAY, ORANGE};
use crate::data::{Dataset, StateYearRecord};
use crate::state::{SelectionState, STATE_CODES};

pub const PRICE_RANGE: [f64; 2] = [1.00, 3.00];
pub const SALES_RANGE: [f64; 2] = [40.0, 180.0];

const AVG_LINE_WIDTH: f32 = 4.0;
const STATE_LINE_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesChart {
    pub title: String,
    pub year_axis: AxisSpec,
    pub price_axis: AxisSpec,
    pub sales_axis: AxisSpec,
    pub series: Vec<LineSeries>,
    pub legend: LegendCorner,
    pub grid_alpha: f32,
}

/// Builds the dual-axis price/sales time series for the current selection.
///
/// Series order matches the legend order: average price, per-state price
/// lines, average sales, per-state sales lines. States are emitted in
/// STATE_CODES order, one price line and one sales line each, whether or
/// not the dataset has rows for them. An empty selection with the average
/// toggle off yields a chart with axes and no series.
pub fn build(dataset: &Dataset, selection: &SelectionState) -> TimeSeriesChart {
    let mut series = Vec::new();

    if selection.show_average {
        series.push(LineSeries {
            name: "min price national average".to_string(),
            axis: ValueAxis::Price,
            points: dataset
                .avg_price
                .iter()
                .map(|row| [row.year as f64, row.mean])
                .collect(),
            color: ORANGE,
            width: AVG_LINE_WIDTH,
            alpha: 1.0,
            dashed: true,
        });
    }

    for code in selected_in_order(selection) {
        series.push(LineSeries {
            name: "min price by state".to_string(),
            axis: ValueAxis::Price,
            points: state_points(dataset, code, |row| row.adjusted_min_price),
            color: ORANGE,
            width: STATE_LINE_WIDTH,
            alpha: 0.5,
            dashed: false,
        });
    }

    if selection.show_average {
        series.push(LineSeries {
            name: "sales national average".to_string(),
            axis: ValueAxis::Sales,
            points: dataset
                .avg_sales
                .iter()
                .map(|row| [row.year as f64, row.mean])
                .collect(),
            color: GRAY,
            width: AVG_LINE_WIDTH,
            alpha: 1.0,
            dashed: true,
        });
    }

    for code in selected_in_order(selection) {
        series.push(LineSeries {
            name: "sales by state".to_string(),
            axis: ValueAxis::Sales,
            points: state_points(dataset, code, |row| row.sales),
            color: GRAY,
            width: STATE_LINE_WIDTH,
            alpha: 0.75,
            dashed: false,
        });
    }

    TimeSeriesChart {
        title: "Cigarette Prices in the US from 1963 to 1992".to_string(),
        year_axis: AxisSpec {
            label: "year".to_string(),
            format: TickFormat::Plain,
            range: None,
        },
        price_axis: AxisSpec {
            label: "minimum price of cigarette pack (adjusted to 2016 USD)".to_string(),
            format: TickFormat::Currency,
            range: Some(PRICE_RANGE),
        },
        sales_axis: AxisSpec {
            label: "cigarette sales in packs per capita".to_string(),
            format: TickFormat::Plain,
            range: Some(SALES_RANGE),
        },
        series,
        legend: LegendCorner::BottomRight,
        grid_alpha: 0.3,
    }
}

fn selected_in_order<'a>(
    selection: &'a SelectionState,
) -> impl Iterator<Item = &'static str> + 'a {
    STATE_CODES
        .iter()
        .copied()
        .filter(move |code| selection.is_selected(code))
}

/// One [year, value] vertex per row that actually has the value; missing
/// fields shorten the line rather than breaking the build.
fn state_points(
    dataset: &Dataset,
    code: &str,
    value: impl Fn(&StateYearRecord) -> Option<f64>,
) -> Vec<[f64; 2]> {
    dataset
        .rows_for_state(code)
        .filter_map(|row| value(row).map(|v| [row.year as f64, v]))
        .collect()
}
