//! Headless one-shot: run a single backtest through the same controller the
//! GUI uses and print the panel descriptors as JSON.

use anyhow::{Context, Result, bail};
use backtest_dashboard::config::{BACKEND, DEFAULTS};
use backtest_dashboard::engine::worker;
use backtest_dashboard::{
    HttpBacktestSource, RequestController, SettleOutcome, init_logging, render_panels,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Ticker symbol (sent as typed; case does not matter to the backend)
    #[arg(long, default_value = DEFAULTS.ticker)]
    ticker: String,
    /// Start date, YYYY-MM-DD
    #[arg(long, default_value = DEFAULTS.start)]
    start: String,
    /// End date, YYYY-MM-DD
    #[arg(long, default_value = DEFAULTS.end)]
    end: String,
    /// Base address of the backtest backend
    #[arg(long, default_value = BACKEND.base_url)]
    backend_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let source = HttpBacktestSource::new(&args.backend_url)?;

    let mut controller = RequestController::default();
    {
        let params = controller.params_mut();
        params.ticker = args.ticker;
        params.start = args.start;
        params.end = args.end;
    }

    let Some(pending) = controller.begin_run() else {
        bail!("A request is already in flight");
    };
    let settlement = worker::execute(&source, pending).await;

    match controller.settle(settlement) {
        SettleOutcome::Succeeded => {
            let (Some(result), Some(params)) = (controller.result(), controller.result_params())
            else {
                bail!("Controller reported success without a result");
            };
            let panels = render_panels(result, &params.ticker);
            let json = serde_json::to_string_pretty(&panels)
                .context("Failed to serialize panel descriptors")?;
            println!("{}", json);
            Ok(())
        }
        SettleOutcome::Failed => {
            let msg = controller.error().unwrap_or_default().to_string();
            eprintln!("⚠ Error: {}", msg);
            std::process::exit(1);
        }
        SettleOutcome::Stale => bail!("Request was superseded"),
    }
}
