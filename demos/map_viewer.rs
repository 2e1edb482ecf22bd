//! Interactive campus map using egui (requires `--features egui`).
//!
//! Usage:
//!   cargo run --features egui --example map_viewer -- [--config map.json]

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use campusmap::config::MapConfig;
use campusmap::egui_app::MapApp;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive campus map viewer", long_about = None)]
struct Args {
    /// JSON file overriding map settings
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = MapConfig::load_or_default(args.config.as_deref())?;

    // Phone-like portrait window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([390.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Campus Map",
        options,
        Box::new(move |_cc| Ok(Box::new(MapApp::new(cfg)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
