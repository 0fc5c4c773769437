#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::logging::setup_logging;
use folio_core::HeroConfig;

/// Global hero configuration, loaded once at startup
static CONFIG: OnceLock<HeroConfig> = OnceLock::new();

/// Get the hero configuration (loaded at startup, or the built-in default)
pub fn get_config() -> HeroConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Folio Hero - portfolio landing panel
#[derive(Parser, Debug)]
#[command(name = "folio-hero-desktop")]
#[command(about = "Folio Hero - portfolio landing panel")]
struct Args {
    /// Config file (default: <config dir>/folio-hero/hero.json, else built-in)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose.max(1));

    let config = match HeroConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load hero config: {}", e);
            std::process::exit(1);
        }
    };

    let title = format!("{} - Portfolio", config.personal.name);
    tracing::info!(
        "Starting '{}' with {} phrases",
        config.personal.name,
        config.phrases.len()
    );

    // Store config globally
    let _ = CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 800.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
