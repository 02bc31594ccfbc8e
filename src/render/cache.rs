use std::sync::Arc;

use crate::domain::BacktestResult;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::panels::render_panels;
use super::series::RenderedPanels;

/// Keeps the last projection so it is rebuilt only when the result changes.
///
/// Identity is the `Arc` pointer (results are immutable once received) plus
/// the ticker used in the price panel title.
#[derive(Default)]
pub struct PanelCache {
    entry: Option<CacheEntry>,
    misses: usize,
    hits: usize,
}

struct CacheEntry {
    result: Arc<BacktestResult>,
    ticker: String,
    panels: Arc<RenderedPanels>,
}

impl PanelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_render(&mut self, result: &Arc<BacktestResult>, ticker: &str) -> Arc<RenderedPanels> {
        if let Some(entry) = &self.entry {
            if Arc::ptr_eq(&entry.result, result) && entry.ticker == ticker {
                self.hits += 1;
                return Arc::clone(&entry.panels);
            }
        }

        self.misses += 1;
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_render_cache {
            log::info!(
                "Render cache miss #{} (hits so far: {}) for {}",
                self.misses,
                self.hits,
                ticker
            );
        }

        let panels = Arc::new(render_panels(result, ticker));
        self.entry = Some(CacheEntry {
            result: Arc::clone(result),
            ticker: ticker.to_string(),
            panels: Arc::clone(&panels),
        });
        panels
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn has_cache(&self) -> bool {
        self.entry.is_some()
    }

    pub fn cache_hits(&self) -> usize {
        self.hits
    }

    pub fn cache_misses(&self) -> usize {
        self.misses
    }
}
