mod app;
mod color;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use app::PenguinDashApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset load failure is fatal: nothing to show without it.
    let dataset = data::loader::load_bundled().context("loading bundled penguin dataset")?;
    log::info!("Loaded {} penguin records", dataset.len());
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Palmer Penguins Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
