//! Shared request and response types for the backend APIs.

use serde::{Deserialize, Serialize};

use crate::domain::{Asset, Commit};

// ============================================================================
// Registration API
// ============================================================================

/// Response body for asset create/read/update.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetResponse {
    pub id: String,
    pub asset_file_name: String,
    pub asset_file_mime_type: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
}

impl From<AssetResponse> for Asset {
    fn from(response: AssetResponse) -> Self {
        Asset {
            nid: response.id,
            filename: response.asset_file_name,
            mime_type: response.asset_file_mime_type,
            caption: response.caption,
            headline: response.headline,
        }
    }
}

// ============================================================================
// History and Tree-Merge Services
// ============================================================================

/// One commit record from the history service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub asset_tree_cid: String,
    pub tx_hash: String,
    pub author: String,
    pub committer: String,
    pub timestamp_created: i64,
    pub action: String,
}

impl From<CommitRecord> for Commit {
    fn from(record: CommitRecord) -> Self {
        Commit {
            asset_tree_cid: record.asset_tree_cid,
            tx_hash: record.tx_hash,
            author: record.author,
            committer: record.committer,
            timestamp: record.timestamp_created,
            action: record.action,
        }
    }
}

/// Response body from the history service.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
}

/// One entry of the list posted to the tree-merge service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCommitEntry {
    pub asset_tree_cid: String,
    pub timestamp_created: i64,
}

impl From<&Commit> for MergeCommitEntry {
    fn from(commit: &Commit) -> Self {
        MergeCommitEntry {
            asset_tree_cid: commit.asset_tree_cid.clone(),
            timestamp_created: commit.timestamp,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_asset_response_maps_to_asset() {
        let response: AssetResponse = serde_json::from_value(json!({
            "id": "bafy-nid",
            "asset_file_name": "a.png",
            "asset_file_mime_type": "image/png",
        }))
        .unwrap();

        let asset = Asset::from(response);
        assert_eq!(asset.nid, "bafy-nid");
        assert_eq!(asset.filename, "a.png");
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.caption, None);
        assert_eq!(asset.headline, None);
    }

    #[test]
    fn test_commit_record_maps_timestamp() {
        let record: CommitRecord = serde_json::from_value(json!({
            "assetTreeCid": "bafy-tree",
            "txHash": "0xdead",
            "author": "0xa",
            "committer": "0xb",
            "timestampCreated": 1700000000,
            "action": "registered",
        }))
        .unwrap();

        let commit = Commit::from(record);
        assert_eq!(commit.asset_tree_cid, "bafy-tree");
        assert_eq!(commit.timestamp, 1700000000);
    }

    #[test]
    fn test_merge_entry_serializes_camel_case() {
        let commit = Commit {
            asset_tree_cid: "bafy-tree".to_string(),
            tx_hash: "0xdead".to_string(),
            author: "0xa".to_string(),
            committer: "0xb".to_string(),
            timestamp: 1700000000,
            action: "registered".to_string(),
        };

        let entry = MergeCommitEntry::from(&commit);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({ "assetTreeCid": "bafy-tree", "timestampCreated": 1700000000 })
        );
    }
}
