//! The Capture client: registration, provenance retrieval, and search.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use tracing::{debug, info};

use crate::api::{AssetResponse, HistoryResponse, MergeCommitEntry, Payload, RequestExecutor};
use crate::crypto::{build_integrity_proof, sign_integrity_proof};
use crate::domain::{
    Asset, AssetSearchOptions, AssetSearchResult, AssetTree, Commit, NftSearchResult,
    RegisterOptions, UpdateOptions,
};
use crate::error::{CaptureError, Result};
use crate::input::{normalize, FileInput};

// ============================================================================
// Endpoints and Limits
// ============================================================================

/// Default registration API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.numbersprotocol.io/api/v3";

/// Default commit-history service URL.
pub const HISTORY_API_URL: &str =
    "https://e23hi68y55.execute-api.us-east-1.amazonaws.com/default/get-commits-storage-backend-jade-near";

/// Default tree-merge service URL.
pub const MERGE_TREE_API_URL: &str =
    "https://us-central1-numbers-protocol-api.cloudfunctions.net/get-full-asset-tree";

/// Default similarity-search service URL.
pub const ASSET_SEARCH_API_URL: &str =
    "https://us-central1-numbers-protocol-api.cloudfunctions.net/asset-search";

/// Default cross-chain NFT search service URL.
pub const NFT_SEARCH_API_URL: &str =
    "https://us-central1-numbers-protocol-api.cloudfunctions.net/nft-search";

/// Maximum headline length accepted by the registration API.
pub const MAX_HEADLINE_CHARS: usize = 25;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// Configuration
// ============================================================================

/// Client configuration.
///
/// Explicitly passed to [`Capture::with_config`]; the SDK holds no global
/// state. The token and signing key are never logged.
#[derive(Clone)]
pub struct CaptureConfig {
    /// Authentication token for API access.
    pub token: String,
    /// Use the testnet environment for history lookups.
    pub testnet: bool,
    /// Registration API base URL.
    pub base_url: String,
    /// Commit-history service URL.
    pub history_url: String,
    /// Tree-merge service URL.
    pub merge_tree_url: String,
    /// Similarity-search service URL.
    pub asset_search_url: String,
    /// Cross-chain NFT search service URL.
    pub nft_search_url: String,
    /// Client-level signing key; per-call sign options take precedence.
    pub private_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl CaptureConfig {
    /// Configuration with the default production endpoints.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            testnet: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            history_url: HISTORY_API_URL.to_string(),
            merge_tree_url: MERGE_TREE_API_URL.to_string(),
            asset_search_url: ASSET_SEARCH_API_URL.to_string(),
            nft_search_url: NFT_SEARCH_API_URL.to_string(),
            private_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `CAPTURE_TOKEN` (required), `CAPTURE_TESTNET`, and
    /// `CAPTURE_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("CAPTURE_TOKEN")
            .map_err(|_| CaptureError::validation("CAPTURE_TOKEN is not set"))?;

        let mut config = Self::new(token);
        config.testnet = std::env::var("CAPTURE_TESTNET")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if let Ok(base_url) = std::env::var("CAPTURE_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Use the testnet environment.
    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.testnet = testnet;
        self
    }

    /// Override the registration API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a client-level signing key used when a call supplies none.
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Token and key material stay out of Debug output.
impl std::fmt::Debug for CaptureConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureConfig")
            .field("testnet", &self.testnet)
            .field("base_url", &self.base_url)
            .field("history_url", &self.history_url)
            .field("merge_tree_url", &self.merge_tree_url)
            .field("asset_search_url", &self.asset_search_url)
            .field("nft_search_url", &self.nft_search_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Asset registration and provenance client.
///
/// Each instance carries its own configuration and HTTP connection pool;
/// concurrent calls are fully independent and share nothing beyond that
/// pool. No call is retried and no response is cached.
///
/// Every operation returns an independent future; dropping it (for example
/// from a `tokio::select!` against a shutdown signal) aborts the in-flight
/// request. HTTP is at-most-once: a registration cancelled after the server
/// accepted it may still have created the asset.
///
/// # Example
///
/// ```no_run
/// use capture_sdk::{Capture, RegisterOptions};
///
/// # async fn demo() -> capture_sdk::Result<()> {
/// let capture = Capture::new("your-api-token")?;
/// let asset = capture
///     .register(
///         "./photo.jpg",
///         RegisterOptions {
///             caption: Some("My photo".to_string()),
///             ..Default::default()
///         },
///     )
///     .await?;
/// println!("registered {}", asset.nid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Capture {
    executor: RequestExecutor,
    config: CaptureConfig,
}

impl Capture {
    /// Create a client with the default endpoints.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(CaptureConfig::new(token))
    }

    /// Create a client from explicit configuration.
    pub fn with_config(config: CaptureConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(CaptureError::validation("token is required"));
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CaptureError::network(format!("failed to build HTTP client: {e}"), None))?;
        let executor = RequestExecutor::new(http, config.token.clone());
        Ok(Self { executor, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Registration / Update
    // ------------------------------------------------------------------

    /// Register a new asset.
    ///
    /// Normalizes the file input, optionally builds and signs an integrity
    /// proof over the original bytes, and submits the multipart registration
    /// request. Validation failures (oversized headline, empty file, missing
    /// filename for binary inputs) surface before any network call.
    pub async fn register(
        &self,
        file: impl Into<FileInput>,
        options: RegisterOptions,
    ) -> Result<Asset> {
        validate_headline(options.headline.as_deref())?;

        let normalized = normalize(file.into(), options.filename.as_deref()).await?;
        if normalized.bytes.is_empty() {
            return Err(CaptureError::validation("file cannot be empty"));
        }
        debug!(
            filename = %normalized.filename,
            mime_type = %normalized.mime_type,
            size = normalized.bytes.len(),
            "normalized file input"
        );

        let mut form = Form::new().text(
            "public_access",
            if options.public_access { "true" } else { "false" },
        );
        if let Some(caption) = &options.caption {
            form = form.text("caption", caption.clone());
        }
        if let Some(headline) = &options.headline {
            form = form.text("headline", headline.clone());
        }

        // Per-call key wins over the client-level one.
        let private_key = options
            .sign
            .as_ref()
            .map(|sign| sign.private_key.as_str())
            .or(self.config.private_key.as_deref());
        if let Some(private_key) = private_key {
            let proof = build_integrity_proof(&normalized.bytes, &normalized.mime_type);
            let signature = sign_integrity_proof(&proof, private_key)?;
            form = form
                .text("signed_metadata", proof.canonical_json())
                .text("signature", signature.to_wire_list());
        }

        let part = Part::bytes(normalized.bytes)
            .file_name(normalized.filename)
            .mime_str(&normalized.mime_type)
            .map_err(|_| {
                CaptureError::validation(format!("invalid MIME type: {}", normalized.mime_type))
            })?;
        form = form.part("asset_file", part);

        let url = format!("{}/assets/", self.config.base_url);
        let response: AssetResponse = self
            .executor
            .execute_as(Method::POST, &url, Payload::Multipart(form), None)
            .await?;
        info!(nid = %response.id, "asset registered");
        Ok(response.into())
    }

    /// Update an existing asset's metadata.
    ///
    /// Only fields present in `options` are sent.
    pub async fn update(&self, nid: &str, options: UpdateOptions) -> Result<Asset> {
        require_nid(nid)?;
        validate_headline(options.headline.as_deref())?;

        let mut form = Form::new();
        if let Some(caption) = &options.caption {
            form = form.text("caption", caption.clone());
        }
        if let Some(headline) = &options.headline {
            form = form.text("headline", headline.clone());
        }
        if let Some(commit_message) = &options.commit_message {
            form = form.text("commit_message", commit_message.clone());
        }
        if let Some(custom_metadata) = &options.custom_metadata {
            let metadata_json = serde_json::to_string(custom_metadata).map_err(|e| {
                CaptureError::validation(format!("custom metadata is not serializable: {e}"))
            })?;
            form = form.text("nit_commit_custom", metadata_json);
        }

        let url = format!("{}/assets/{}/", self.config.base_url, nid);
        let response: AssetResponse = self
            .executor
            .execute_as(Method::PATCH, &url, Payload::Multipart(form), Some(nid))
            .await?;
        info!(nid = %response.id, "asset updated");
        Ok(response.into())
    }

    /// Retrieve a single asset by NID.
    pub async fn get(&self, nid: &str) -> Result<Asset> {
        require_nid(nid)?;

        let url = format!("{}/assets/{}/", self.config.base_url, nid);
        let response: AssetResponse = self
            .executor
            .execute_as(Method::GET, &url, Payload::Empty, Some(nid))
            .await?;
        Ok(response.into())
    }

    // ------------------------------------------------------------------
    // History / Tree Merge
    // ------------------------------------------------------------------

    /// Retrieve the commit history of an asset.
    ///
    /// Commits come back in the order the history service returned them;
    /// the client imposes no ordering of its own.
    pub async fn get_history(&self, nid: &str) -> Result<Vec<Commit>> {
        require_nid(nid)?;

        let mut params = vec![("nid", nid.to_string())];
        if self.config.testnet {
            params.push(("testnet", "true".to_string()));
        }
        let url = Url::parse_with_params(&self.config.history_url, &params)
            .map_err(|e| CaptureError::validation(format!("invalid history URL: {e}")))?;

        let response: HistoryResponse = self
            .executor
            .execute_as(Method::GET, url.as_str(), Payload::Empty, Some(nid))
            .await?;
        Ok(response.commits.into_iter().map(Commit::from).collect())
    }

    /// Retrieve the merged asset tree containing full provenance data.
    ///
    /// Fetches the commit history first and only then posts the projected
    /// commit list to the merge service; the merge service has no NID-based
    /// lookup of its own. Fails with `NO_COMMITS` when the history is empty,
    /// without calling the merge service.
    pub async fn get_asset_tree(&self, nid: &str) -> Result<AssetTree> {
        let commits = self.get_history(nid).await?;
        if commits.is_empty() {
            return Err(CaptureError::no_commits().with_nid(nid));
        }
        debug!(nid, commits = commits.len(), "merging asset tree");

        let entries: Vec<MergeCommitEntry> = commits.iter().map(MergeCommitEntry::from).collect();
        let body = serde_json::to_value(&entries)
            .map_err(|e| CaptureError::network(format!("failed to encode merge request: {e}"), None))?;

        let value = self
            .executor
            .execute(
                Method::POST,
                &self.config.merge_tree_url,
                Payload::Json(body),
                Some(nid),
            )
            .await?;

        let merged = match value.get("mergedAssetTree") {
            Some(tree) if !tree.is_null() => tree.clone(),
            _ => value,
        };
        serde_json::from_value(merged).map_err(|e| {
            CaptureError::network(format!("unexpected response body: {e}"), None).with_nid(nid)
        })
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Search for identical or similar assets.
    ///
    /// One of `file_url`, `file`, or `nid` must be given; when several are,
    /// the priority order is `file_url > nid > file`.
    pub async fn search_asset(&self, options: AssetSearchOptions) -> Result<AssetSearchResult> {
        if options.file_url.is_none() && options.file.is_none() && options.nid.is_none() {
            return Err(CaptureError::validation(
                "Must provide file_url, file, or nid for asset search",
            ));
        }
        if let Some(threshold) = options.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(CaptureError::validation("threshold must be between 0 and 1"));
            }
        }
        if let Some(sample_count) = options.sample_count {
            if sample_count == 0 {
                return Err(CaptureError::validation(
                    "sample_count must be a positive integer",
                ));
            }
        }

        let mut form = Form::new();
        if let Some(file_url) = options.file_url {
            form = form.text("file_url", file_url);
        } else if let Some(nid) = options.nid {
            form = form.text("nid", nid);
        } else if let Some(file) = options.file {
            // No filename option here: anonymous binary inputs fail their
            // own required-filename check, so only named inputs are
            // searchable.
            let normalized = normalize(file, None).await?;
            let part = Part::bytes(normalized.bytes)
                .file_name(normalized.filename)
                .mime_str(&normalized.mime_type)
                .map_err(|_| {
                    CaptureError::validation(format!(
                        "invalid MIME type: {}",
                        normalized.mime_type
                    ))
                })?;
            form = form.part("file", part);
        }
        if let Some(threshold) = options.threshold {
            form = form.text("threshold", threshold.to_string());
        }
        if let Some(sample_count) = options.sample_count {
            form = form.text("sample_count", sample_count.to_string());
        }

        self.executor
            .execute_as(
                Method::POST,
                &self.config.asset_search_url,
                Payload::Multipart(form),
                None,
            )
            .await
    }

    /// Search for NFTs minted from an asset across chains.
    pub async fn search_nft(&self, nid: &str) -> Result<NftSearchResult> {
        require_nid(nid)?;

        let body = serde_json::json!({ "nid": nid });
        self.executor
            .execute_as(
                Method::POST,
                &self.config.nft_search_url,
                Payload::Json(body),
                Some(nid),
            )
            .await
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

fn require_nid(nid: &str) -> Result<()> {
    if nid.is_empty() {
        return Err(CaptureError::validation("nid is required"));
    }
    Ok(())
}

fn validate_headline(headline: Option<&str>) -> Result<()> {
    if let Some(headline) = headline {
        if headline.chars().count() > MAX_HEADLINE_CHARS {
            return Err(CaptureError::validation(
                "headline must be 25 characters or less",
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
