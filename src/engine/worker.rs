use std::sync::Arc;
use std::time::Instant;

use poll_promise::Promise;
use tokio::runtime::Handle;

use super::messages::{PendingRequest, Settlement};
use super::source::BacktestSource;

/// Perform one accepted request and tag the outcome with its ticket.
pub async fn execute(source: &dyn BacktestSource, pending: PendingRequest) -> Settlement {
    let start = Instant::now();
    let outcome = source.fetch(&pending.params).await;

    Settlement {
        ticket: pending.ticket,
        outcome,
        elapsed: start.elapsed(),
    }
}

/// Run a request on a worker thread, blocking on the shared tokio runtime.
///
/// The promise always resolves; there is no cancellation. Dropping it just
/// means nobody reads the answer.
pub fn spawn_request(
    runtime: &Handle,
    source: Arc<dyn BacktestSource>,
    pending: PendingRequest,
) -> Promise<Settlement> {
    let runtime = runtime.clone();
    Promise::spawn_thread("backtest_request", move || {
        runtime.block_on(execute(source.as_ref(), pending))
    })
}
