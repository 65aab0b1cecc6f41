//! Search result records from the verification backends.

use serde::{Deserialize, Serialize};

/// A similar asset match from the search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMatch {
    /// NID of the matched asset.
    pub nid: String,
    /// Distance score; lower means more similar.
    pub distance: f64,
}

/// Result of a similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSearchResult {
    /// NID of the exact match; empty when there is none.
    pub precise_match: String,
    /// MIME type of the input file as the backend saw it.
    pub input_file_mime_type: String,
    /// Similar asset matches.
    #[serde(default)]
    pub similar_matches: Vec<SimilarMatch>,
    /// Order ID for the search transaction.
    pub order_id: String,
}

/// An NFT record from the cross-chain search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftRecord {
    /// NFT token ID.
    pub token_id: String,
    /// Smart contract address.
    pub contract: String,
    /// Blockchain network (e.g., "ethereum", "polygon").
    pub network: String,
    /// Owner's wallet address.
    #[serde(default)]
    pub owner: Option<String>,
}

/// Result of a cross-chain NFT search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSearchResult {
    /// NFT records found.
    #[serde(default)]
    pub records: Vec<NftRecord>,
    /// Order ID for the search transaction.
    pub order_id: String,
}
