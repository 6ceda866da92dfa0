// src/ui/charts.rs
//
// Maps the pure chart descriptions onto egui_plot. Everything here is
// presentation only; the builders in `crate::chart` decide what is shown.
use eframe::egui;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, Points};

use crate::chart::scatter::ScatterPoint;
use crate::chart::{
    LegendCorner, LineSeries, Rgb, ScatterChart, TickFormat, TimeSeriesChart, ValueAxis, GRAY,
    ORANGE,
};

pub fn draw_time_series(ui: &mut egui::Ui, chart: &TimeSeriesChart) {
    ui.heading(&chart.title);
    ui.horizontal(|ui| {
        ui.colored_label(
            color32(ORANGE, 1.0),
            format!("left: {}", chart.price_axis.label),
        );
        ui.colored_label(
            color32(GRAY, 1.0),
            format!("right: {}", chart.sales_axis.label),
        );
    });

    let price_range = chart.price_axis.range.unwrap_or([0.0, 1.0]);
    let sales_range = chart.sales_axis.range.unwrap_or([0.0, 1.0]);

    // Sales series share the year axis but live on their own vertical scale.
    // egui_plot draws into a single coordinate space, so sales values are
    // affinely mapped into the price range and mapped back for hover labels.
    let to_price = move |v: f64| {
        price_range[0]
            + (v - sales_range[0]) * (price_range[1] - price_range[0])
                / (sales_range[1] - sales_range[0])
    };
    let to_sales = move |v: f64| {
        sales_range[0]
            + (v - price_range[0]) * (sales_range[1] - sales_range[0])
                / (price_range[1] - price_range[0])
    };

    let year_span = x_span(chart.series.iter().flat_map(|s| s.points.iter()));
    let price_fmt = chart.price_axis.format;
    let sales_fmt = chart.sales_axis.format;

    let mut plot = Plot::new("time_series_plot")
        .height(420.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .legend(Legend::default().position(corner(chart.legend)))
        .label_formatter(move |name, value: &PlotPoint| {
            if name.is_empty() {
                return String::new();
            }
            let shown = if name.contains("sales") {
                format_value(sales_fmt, to_sales(value.y))
            } else {
                format_value(price_fmt, value.y)
            };
            format!("{}\nyear {:.0}: {}", name, value.x, shown)
        });
    if chart.grid_alpha <= 0.0 {
        plot = plot
            .x_grid_spacer(|_| Vec::new())
            .y_grid_spacer(|_| Vec::new());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [year_span[0], price_range[0]],
            [year_span[1], price_range[1]],
        ));
        for series in &chart.series {
            let points: Vec<[f64; 2]> = match series.axis {
                ValueAxis::Price => series.points.clone(),
                ValueAxis::Sales => series
                    .points
                    .iter()
                    .map(|&[x, y]| [x, to_price(y)])
                    .collect(),
            };
            plot_ui.line(line_item(series, points));
        }
    });
}

pub fn draw_scatter(ui: &mut egui::Ui, chart: &ScatterChart) {
    ui.heading(&chart.title);
    ui.horizontal(|ui| {
        ui.small(format!("x: {}", chart.x_axis.label));
        ui.small(format!("y: {}", chart.y_axis.label));
    });

    let x_fmt = chart.x_axis.format;
    let y_fmt = chart.y_axis.format;
    let markers = chart.points.clone();

    let mut plot = Plot::new("scatter_plot")
        .height(460.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .legend(Legend::default().position(corner(chart.legend)))
        .label_formatter(move |name, value: &PlotPoint| {
            // Hover shows the source row of the nearest marker.
            if let Some(p) = nearest(&markers, value) {
                return format!(
                    "{} {}\nmin price: {}\nsales: {}",
                    p.state,
                    p.year,
                    format_value(x_fmt, p.price),
                    format_value(y_fmt, p.sales),
                );
            }
            if name.is_empty() {
                String::new()
            } else {
                format!(
                    "{}\n{} / {}",
                    name,
                    format_value(x_fmt, value.x),
                    format_value(y_fmt, value.y)
                )
            }
        });
    if chart.grid_alpha <= 0.0 {
        plot = plot
            .x_grid_spacer(|_| Vec::new())
            .y_grid_spacer(|_| Vec::new());
    }

    plot.show(ui, |plot_ui| {
        let cloud: Vec<[f64; 2]> = chart.points.iter().map(|p| [p.price, p.sales]).collect();
        plot_ui.points(
            Points::new(cloud)
                .radius(3.0)
                .color(color32(chart.point_color, chart.point_alpha))
                .name(&chart.points_label),
        );
        if let Some(line) = &chart.fit_line {
            plot_ui.line(line_item(line, line.points.clone()));
        }
    });
}

fn line_item(series: &LineSeries, points: Vec<[f64; 2]>) -> Line {
    let mut line = Line::new(points)
        .color(color32(series.color, series.alpha))
        .width(series.width)
        .name(&series.name);
    if series.dashed {
        line = line.style(LineStyle::Dashed { length: 10.0 });
    }
    line
}

fn nearest<'a>(points: &'a [ScatterPoint], at: &PlotPoint) -> Option<&'a ScatterPoint> {
    // Hover tolerance in data units, roughly a marker's footprint.
    const MAX_DX: f64 = 0.05;
    const MAX_DY: f64 = 4.0;
    points
        .iter()
        .filter(|p| (p.price - at.x).abs() <= MAX_DX && (p.sales - at.y).abs() <= MAX_DY)
        .min_by(|a, b| {
            let da = (a.price - at.x).powi(2) + ((a.sales - at.y) / 50.0).powi(2);
            let db = (b.price - at.x).powi(2) + ((b.sales - at.y) / 50.0).powi(2);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn x_span<'a>(points: impl Iterator<Item = &'a [f64; 2]>) -> [f64; 2] {
    let mut span: Option<[f64; 2]> = None;
    for &[x, _] in points {
        let s = span.get_or_insert([x, x]);
        s[0] = s[0].min(x);
        s[1] = s[1].max(x);
    }
    // Falls back to the dataset's published span for an empty chart.
    span.unwrap_or([1963.0, 1992.0])
}

fn color32(rgb: Rgb, alpha: f32) -> egui::Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

fn corner(corner: LegendCorner) -> Corner {
    match corner {
        LegendCorner::BottomRight => Corner::RightBottom,
        LegendCorner::TopRight => Corner::RightTop,
    }
}

fn format_value(format: TickFormat, v: f64) -> String {
    match format {
        TickFormat::Currency => format!("${:.2}", v),
        TickFormat::Plain => format!("{:.1}", v),
    }
}
