#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use anyhow::{Context, anyhow};
use backtest_dashboard::{BacktestSource, Cli, HttpBacktestSource, init_logging, run_app};
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    init_logging();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the network calls. Requests block on it from worker threads.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let source: Arc<dyn BacktestSource> = Arc::new(HttpBacktestSource::new(&args.backend_url)?);
    log::info!("🚀 Backtest dashboard starting against {}", args.backend_url);

    // D. Run Native App (no persistence: every session starts from the defaults)
    let options = NativeOptions::default();
    let handle = rt.handle().clone();

    eframe::run_native(
        "Algo Trading Dashboard",
        options,
        Box::new(move |cc| Ok(run_app(cc, source, handle))),
    )
    .map_err(|e| anyhow!("GUI exited with error: {e}"))
}
