// Domain types and value objects
pub mod params;
pub mod result;

// Re-export commonly used types
pub use params::BacktestParams;
pub use result::BacktestResult;
