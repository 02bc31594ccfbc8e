//! Configuration module for the backtest dashboard.

pub mod backend;
pub mod defaults;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use backend::BACKEND;
pub use defaults::DEFAULTS;
pub use plot::PLOT_CONFIG;
