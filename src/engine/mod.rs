// The request engine: state machine plus the plumbing that performs requests.
pub mod controller;
pub mod error;
pub mod messages;
pub mod source;
pub mod state;
pub mod worker;

pub use controller::{RequestController, SettleOutcome};
pub use error::BacktestError;
pub use messages::{PendingRequest, RequestTicket, Settlement};
pub use source::{BacktestSource, HttpBacktestSource};
pub use state::{Phase, RequestState};
