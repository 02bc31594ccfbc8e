#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod engine;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{BacktestParams, BacktestResult};
pub use engine::{
    BacktestError, BacktestSource, HttpBacktestSource, RequestController, RequestState,
    SettleOutcome,
};
pub use render::{RenderedPanels, render_panels};
pub use ui::DashboardApp;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

use crate::config::BACKEND;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base address of the backtest backend
    #[arg(long, default_value = BACKEND.base_url)]
    pub backend_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    source: Arc<dyn BacktestSource>,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(cc, source, runtime);
    Box::new(app)
}

/// Initialise `env_logger` at Info unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
