//! Isolation AI Engine GUI
//!
//! A graphical interface for playing Isolation against the engine or another player.
//! Set `RUST_LOG=isolation=debug` to follow the search depth by depth.

use isolation::ui::IsolationApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Isolation"),
        ..Default::default()
    };

    eframe::run_native(
        "Isolation",
        options,
        Box::new(|cc| Ok(Box::new(IsolationApp::new(cc)))),
    )
}
