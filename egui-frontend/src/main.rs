use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::HostCalendarApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Host Calendar egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Good size for calendar + sidebar
            .with_min_inner_size([900.0, 600.0])
            .with_title("Host Calendar")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Host Calendar",
        options,
        Box::new(|cc| {
            match HostCalendarApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized Host Calendar app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
