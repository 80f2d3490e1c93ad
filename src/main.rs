#![warn(clippy::all, rust_2018_idioms)]

mod options;

use eframe::NativeOptions;
use options::{LaunchOptions, USAGE};
use trace_app::App;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let launch = match LaunchOptions::parse(std::env::args().skip(1)) {
        Ok(launch) => launch,
        Err(e) => {
            eprintln!("{e:#}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    log::info!(
        "starting overlay: scale={} max_entries={:?} heartbeat={:?}",
        launch.config.scale_x,
        launch.config.max_entries,
        launch.heartbeat
    );

    let mut app = App::new(launch.config, launch.heartbeat)?;
    app.trace_message("overlay ready");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("Overlay Trace"),
        ..Default::default()
    };

    eframe::run_native("Overlay Trace", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))?;

    log::info!("window closed");
    Ok(())
}
