mod app;
mod canvas;

use anyhow::Result;
use eframe::egui;
use quadrant_core::GridConfig;

use crate::app::QuadrantApp;

fn main() -> Result<()> {
    env_logger::init();

    let (config, path) = GridConfig::discover()?;
    match &path {
        Some(path) => log::info!("Loaded config from {:?}", path),
        None => log::info!("Using default config"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Quadrant Grid",
        options,
        Box::new(|cc| Ok(Box::new(QuadrantApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))
}
