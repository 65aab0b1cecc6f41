//! Assets, commits, and merged asset trees.

use serde::{Deserialize, Serialize};

/// Registered asset information.
///
/// The `nid` is the content-addressed identifier assigned by the backend at
/// registration; it never changes afterwards. Updates do not mutate an
/// `Asset` in place, they yield the replacement record the server returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Numbers ID (NID), the asset's unique identifier.
    pub nid: String,
    /// Original filename.
    pub filename: String,
    /// MIME type of the asset.
    pub mime_type: String,
    /// Asset description.
    pub caption: Option<String>,
    /// Asset title.
    pub headline: Option<String>,
}

/// One immutable entry in an asset's provenance history.
///
/// Ordering is whatever the history service returned; temporal resolution is
/// the merge service's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// CID of the asset tree at this commit.
    pub asset_tree_cid: String,
    /// Blockchain transaction hash.
    pub tx_hash: String,
    /// Original creator's address.
    pub author: String,
    /// Address that made this commit.
    pub committer: String,
    /// Unix timestamp of the commit, in seconds.
    pub timestamp: i64,
    /// Description of the action.
    pub action: String,
}

/// License information attached to an asset tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name (e.g., "CC BY 4.0").
    pub name: Option<String>,
    /// URL to the license document.
    pub document: Option<String>,
}

/// Merged asset tree containing full provenance data.
///
/// Derived, not stored: recomputed from the current commit set on every
/// retrieval, so two calls for the same NID may differ if commits landed in
/// between. Unrecognized merge fields are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTree {
    /// Asset content identifier (IPFS CID).
    pub asset_cid: Option<String>,
    /// SHA-256 hash of the asset file.
    pub asset_sha256: Option<String>,
    /// Creator's name.
    pub creator_name: Option<String>,
    /// Creator's wallet address.
    pub creator_wallet: Option<String>,
    /// Unix timestamp when the asset was created.
    pub created_at: Option<i64>,
    /// Location where the asset was created.
    pub location_created: Option<String>,
    /// Asset description.
    pub caption: Option<String>,
    /// Asset title.
    pub headline: Option<String>,
    /// License information.
    pub license: Option<License>,
    /// MIME type (encodingFormat).
    pub mime_type: Option<String>,
    /// NFT record CID, when the asset has been minted.
    pub nft_record: Option<String>,
    /// URL of a website that uses the asset.
    pub used_by: Option<String>,
    /// IPFS CID of the integrity proof.
    pub integrity_cid: Option<String>,
    /// Digital source type (e.g., digitalCapture, trainedAlgorithmicMedia).
    pub digital_source_type: Option<String>,
    /// Mining/indexing preference.
    pub mining_preference: Option<String>,
    /// AI/algorithm information for generated content.
    pub generated_by: Option<String>,
    /// Additional fields from commits.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_asset_tree_deserializes_camel_case() {
        let tree: AssetTree = serde_json::from_value(json!({
            "assetCid": "bafy-cid",
            "assetSha256": "deadbeef",
            "creatorName": "Alice",
            "creatorWallet": "0xabc",
            "createdAt": 1700000000,
            "mimeType": "image/png",
            "nftRecord": "bafk-record",
        }))
        .unwrap();

        assert_eq!(tree.asset_cid.as_deref(), Some("bafy-cid"));
        assert_eq!(tree.asset_sha256.as_deref(), Some("deadbeef"));
        assert_eq!(tree.creator_name.as_deref(), Some("Alice"));
        assert_eq!(tree.created_at, Some(1700000000));
        assert_eq!(tree.nft_record.as_deref(), Some("bafk-record"));
        assert!(tree.extra.is_empty());
    }

    #[test]
    fn test_asset_tree_preserves_unknown_fields() {
        let tree: AssetTree = serde_json::from_value(json!({
            "caption": "hello",
            "proofCid": "bafy-proof",
            "customField": 42,
        }))
        .unwrap();

        assert_eq!(tree.caption.as_deref(), Some("hello"));
        assert_eq!(tree.extra["proofCid"], "bafy-proof");
        assert_eq!(tree.extra["customField"], 42);
    }

    #[test]
    fn test_asset_tree_license_object() {
        let tree: AssetTree = serde_json::from_value(json!({
            "license": { "name": "CC BY 4.0", "document": "https://example.com/license" },
        }))
        .unwrap();

        let license = tree.license.unwrap();
        assert_eq!(license.name.as_deref(), Some("CC BY 4.0"));
        assert_eq!(license.document.as_deref(), Some("https://example.com/license"));
    }

    #[test]
    fn test_empty_tree_is_all_none() {
        let tree: AssetTree = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tree, AssetTree::default());
    }
}
