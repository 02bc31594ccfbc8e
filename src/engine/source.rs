use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::BACKEND;
use crate::domain::{BacktestParams, BacktestResult};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::error::BacktestError;

/// Anything that can turn params into a backtest result.
///
/// The GUI and the headless binary talk to the backend through this, and
/// tests swap in canned implementations.
#[async_trait]
pub trait BacktestSource: Send + Sync {
    async fn fetch(&self, params: &BacktestParams) -> Result<BacktestResult, BacktestError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// The real backend: `GET <base>/backtest?ticker=..&start=..&end=..`
pub struct HttpBacktestSource {
    client: Client,
    endpoint: String,
}

impl HttpBacktestSource {
    /// No timeout is configured. A request runs until the transport gives up.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("backtest-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: BACKEND.endpoint(base_url),
        })
    }
}

#[async_trait]
impl BacktestSource for HttpBacktestSource {
    fn signature(&self) -> &'static str {
        "Backend HTTP"
    }

    async fn fetch(&self, params: &BacktestParams) -> Result<BacktestResult, BacktestError> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&params.query_pairs())
            .build()?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!("GET {}", request.url());
        }

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BacktestError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(BacktestResult::from_json(&body)?)
    }
}
