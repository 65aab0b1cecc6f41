//! Domain models for the Capture SDK
//!
//! Core types for registered assets, provenance commits, merged asset
//! trees, and search results, plus the option structs the workflows take.

mod asset;
mod options;
mod search;

pub use asset::*;
pub use options::*;
pub use search::*;
