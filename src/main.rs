mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::PokeDashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::debug!("startup config: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Poke Dash – Pokémon Stats Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PokeDashApp::new(&config)))),
    )
}
