mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Result};
use app::TipboardApp;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let dataset = data::loader::load_embedded()?;
    log::info!(
        "Loaded {} tipping records, bill range ${:.2}–${:.2}",
        dataset.len(),
        dataset.bill_min,
        dataset.bill_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tipboard – Restaurant Tipping Insights",
        options,
        Box::new(move |_cc| Ok(Box::new(TipboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("eframe error: {e}"))
}
