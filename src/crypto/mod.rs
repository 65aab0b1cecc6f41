//! Cryptographic utilities for the Capture SDK
//!
//! Provides:
//! - SHA-256 content hashing (hex-encoded, the form the backends expect)
//! - Integrity proof construction and EIP-191 signing
//! - Recovery-based signature verification

mod hash;
mod signing;

pub use hash::*;
pub use signing::*;
