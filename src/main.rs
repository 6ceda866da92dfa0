// src/main.rs
use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;

mod analysis;
mod app;
mod chart;
mod data;
mod state;
mod ui;

use app::DashboardApp;
use data::Dataset;

fn data_dir() -> PathBuf {
    std::env::var_os("CIG_TRENDS_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A bad dataset is fatal; the dashboard never starts on a partial load.
    let dataset = Dataset::load(&data_dir())?;
    log::info!(
        "loaded {} state-year rows, {} price averages, {} sales averages",
        dataset.state_years.len(),
        dataset.avg_price.len(),
        dataset.avg_sales.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Cigarette Trends"),
        ..Default::default()
    };

    eframe::run_native(
        "Cigarette Trends",
        options,
        Box::new(|_cc| Box::new(DashboardApp::new(dataset))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
