#![allow(dead_code)]

mod app;
mod calc;
mod data;
mod export;
mod gui;

use app::TutorApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting Spectra Tutor v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Spectra Tutor"),
        ..Default::default()
    };

    eframe::run_native(
        "Spectra Tutor",
        options,
        Box::new(|cc| Ok(Box::new(TutorApp::new(cc)))),
    )
}
