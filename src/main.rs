mod app;
mod config;
mod controller;
mod messages;
mod scene;
mod sequence;

use app::MeterApp;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 560.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Meterlab — Meter as Rhythm",
        native_options,
        Box::new(|cc| Ok(Box::new(MeterApp::new(cc)))),
    )
}
