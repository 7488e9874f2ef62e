use anyhow::Context as _;
use eframe::egui;

mod api;
mod app;
mod config;
mod controller;
mod error;
mod history;
mod link;
mod localizations;
mod models;
mod theme;
mod thumbnail;
mod toast;
mod ui;

use app::ClipGrabApp;
use config::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("clipgrab=info"))
        .init();

    let settings = Settings::from_env();
    log::debug!("settings: {:?}", settings);

    // Simulated API calls run here; the UI thread only polls for results
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("clipgrab-api")
        .build()
        .context("failed to start the background runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title("ClipGrab"),
        ..Default::default()
    };

    let app = ClipGrabApp::new(&settings, runtime);

    eframe::run_native(
        "ClipGrab",
        options,
        Box::new(|cc| {
            // Set light theme
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the window: {}", e))
}
