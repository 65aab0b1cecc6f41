//! API layer for the Capture SDK
//!
//! Wire-level request/response types and the authenticated request executor
//! shared by every workflow.

mod executor;
mod types;

pub use executor::*;
pub use types::*;
