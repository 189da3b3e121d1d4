use anyhow::Context;
use chrono::NaiveDate;
use eframe::egui;
use log::{error, info};

mod ui;

use backend::Backend;
use ui::AppointmentDashboardApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity
    env_logger::init();
    info!("Starting appointment dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            // Narrow enough to reach the mobile layout
            .with_min_inner_size([360.0, 560.0])
            .with_title("Agendamentos")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Appointment Dashboard",
        options,
        Box::new(|_cc| {
            let today = chrono::Local::now().date_naive();
            match create_app(today) {
                Ok(app) => {
                    info!("Successfully initialized appointment dashboard");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}

fn create_app(today: NaiveDate) -> anyhow::Result<AppointmentDashboardApp> {
    let backend = Backend::new().context("failed to start the appointment backend")?;
    Ok(AppointmentDashboardApp::new(backend, today))
}
