//! Application entry point for the interactive dot field.
//!
//! This binary sets up logging and eframe/egui, loads an optional JSON
//! config and delegates all interaction and rendering to [`Viewer`].

mod viewer;

use field_core::config::Config;
use log::{info, warn};
use viewer::Viewer;

/// Loads the config named by the first CLI argument, falling back to
/// defaults when no path is given or the file cannot be used.
fn load_config() -> Config {
    let Some(path) = std::env::args().nth(1) else {
        info!("no config path given; using defaults");
        return Config::default();
    };

    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {path}");
            cfg
        }
        Err(err) => {
            warn!("{err}; using defaults");
            Config::default()
        }
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = load_config();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Dot Field",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
}
