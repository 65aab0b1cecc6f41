//! Capture SDK
//!
//! Client library for the Capture network: registers digital media assets
//! with the provenance service, optionally signs an EIP-191 integrity proof
//! over the asset content, retrieves the asset's append-only commit history,
//! merges that history into a unified provenance record, and searches the
//! verification backends for similar assets and minted NFTs.
//!
//! ## Modules
//!
//! - [`client`] - The [`Capture`] client and its configuration
//! - [`domain`] - Core domain types (assets, commits, asset trees, search results)
//! - [`input`] - Polymorphic file inputs and normalization
//! - [`crypto`] - Content hashing and integrity-proof signing
//! - [`mime`] - MIME type resolution
//! - [`api`] - Wire types and the authenticated request executor
//! - [`error`] - Typed errors
//! - [`verify`] - Verify Engine URL helpers
//!
//! ## Concurrency and cancellation
//!
//! Calls are independent pipelines with no shared state beyond the HTTP
//! connection pool; nothing is cached and nothing is retried. Dropping a
//! returned future aborts the in-flight request, but HTTP is at-most-once:
//! a registration cancelled after the server accepted it may still have
//! created the asset.

pub mod api;
pub mod client;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod input;
pub mod mime;
pub mod verify;

// Re-export commonly used types
pub use client::{Capture, CaptureConfig};
pub use domain::{
    Asset, AssetSearchOptions, AssetSearchResult, AssetTree, Commit, License, NftRecord,
    NftSearchResult, RegisterOptions, SignOptions, SimilarMatch, UpdateOptions,
};
pub use error::{CaptureError, ErrorCode, Result};
pub use input::{FileInput, NormalizedFile};
