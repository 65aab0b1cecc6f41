//! Option structs for the client workflows.

use crate::input::FileInput;

/// Signing configuration for registration.
#[derive(Clone)]
pub struct SignOptions {
    /// Ethereum private key for EIP-191 signing, with or without `0x`.
    pub private_key: String,
}

impl SignOptions {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
        }
    }
}

// Key material stays out of Debug output.
impl std::fmt::Debug for SignOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignOptions").finish_non_exhaustive()
    }
}

/// Options for registering a new asset.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    /// Filename, required for blob and raw-byte inputs.
    pub filename: Option<String>,
    /// Brief description of the asset.
    pub caption: Option<String>,
    /// Asset title (max 25 characters).
    pub headline: Option<String>,
    /// Pin to the public storage gateway (default: true).
    pub public_access: bool,
    /// Optional signing configuration; takes precedence over the
    /// client-level key.
    pub sign: Option<SignOptions>,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            filename: None,
            caption: None,
            headline: None,
            public_access: true,
            sign: None,
        }
    }
}

/// Options for updating an existing asset.
///
/// Only fields that are present are sent; absent fields are left untouched
/// server-side.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Updated description.
    pub caption: Option<String>,
    /// Updated title (max 25 characters).
    pub headline: Option<String>,
    /// Description of the changes.
    pub commit_message: Option<String>,
    /// Custom metadata fields, serialized to JSON text on the wire.
    pub custom_metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Options for similarity search.
///
/// At least one of `file_url`, `file`, or `nid` must be given. When more
/// than one is supplied, sources are consulted in priority order
/// `file_url > nid > file` and the rest are ignored.
#[derive(Debug, Clone, Default)]
pub struct AssetSearchOptions {
    /// URL of the file to search.
    pub file_url: Option<String>,
    /// File to search. Anonymous blob and raw-byte inputs cannot be
    /// searched (there is no filename option here); use a named input.
    pub file: Option<FileInput>,
    /// NID of an existing asset to search.
    pub nid: Option<String>,
    /// Similarity threshold in [0, 1]; lower means more similar.
    pub threshold: Option<f64>,
    /// Number of results to return; must be positive.
    pub sample_count: Option<u32>,
}
