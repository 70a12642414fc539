#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod calc_worker;

use app::ThermocalcApp;
use std::path::PathBuf;
use tc_api::HttpCalculationClient;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional config file as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let client = match tc_app::resolve_client_config(config_path.as_deref(), None)
        .and_then(|config| Ok(HttpCalculationClient::new(config)?))
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to set up calculation client");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Thermodynamic Property Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "ThermoCalc",
        options,
        Box::new(|_cc| Ok(Box::new(ThermocalcApp::new(client)))),
    )
}
