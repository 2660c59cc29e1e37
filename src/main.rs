//! Goalcraft - Fitness Goal Tracker
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Goalcraft v{}", env!("CARGO_PKG_VERSION"));

    let config = goalcraft::storage::config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        goalcraft::AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Goalcraft"),
        ..Default::default()
    };

    eframe::run_native(
        "Goalcraft",
        options,
        Box::new(|cc| Ok(Box::new(app::GoalcraftApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run Goalcraft: {e}"))
}
