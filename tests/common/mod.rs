//! Common test fixtures: an in-process mock of the Capture backends.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::Multipart;
use axum::Router;
use serde_json::{json, Value};

/// Token the mock backend expects.
pub const TEST_TOKEN: &str = "test-token";

/// Test asset NID.
pub const TEST_NID: &str = "bafybeif3mhxhkhfwuszl2lybtai3hz3q6naqpfisd4q55mcc7opkmiv5ei";

// Throwaway key for tests only.
pub const TEST_PRIVATE_KEY: &str =
    "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Counts hits so tests can assert which backends were reached.
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Shared slot the mock handlers write captured request data into.
pub struct Recorded<T>(Arc<Mutex<Option<T>>>);

impl<T> Default for Recorded<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }
}

impl<T> Clone for Recorded<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Clone> Recorded<T> {
    pub fn set(&self, value: T) {
        *self.0.lock().unwrap() = Some(value);
    }

    pub fn get(&self) -> T {
        self.0.lock().unwrap().clone().expect("nothing recorded")
    }

    pub fn is_set(&self) -> bool {
        self.0.lock().unwrap().is_some()
    }
}

/// One recorded part of a multipart request.
#[derive(Debug, Clone, Default)]
pub struct RecordedPart {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl RecordedPart {
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.clone()).expect("part is not UTF-8")
    }
}

/// A multipart request drained into named parts.
pub type RecordedForm = HashMap<String, RecordedPart>;

/// Drain a multipart request into a map of named parts.
pub async fn read_multipart(mut multipart: Multipart) -> RecordedForm {
    let mut form = RecordedForm::new();
    while let Some(field) = multipart.next_field().await.expect("malformed multipart") {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.expect("failed to read field").to_vec();
        form.insert(
            name,
            RecordedPart {
                filename,
                content_type,
                bytes,
            },
        );
    }
    form
}

/// Serve a router on an ephemeral port, returning its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Configuration pointing every endpoint at the mock backend at `base`.
pub fn test_config(base: &str) -> capture_sdk::CaptureConfig {
    let mut config = capture_sdk::CaptureConfig::new(TEST_TOKEN);
    config.base_url = base.to_string();
    config.history_url = format!("{base}/history");
    config.merge_tree_url = format!("{base}/merge");
    config.asset_search_url = format!("{base}/asset-search");
    config.nft_search_url = format!("{base}/nft-search");
    config
}

/// Client configured entirely against the mock backend at `base`.
pub fn test_client(base: &str) -> capture_sdk::Capture {
    capture_sdk::Capture::with_config(test_config(base)).unwrap()
}

/// Canned successful registration/get/update response.
pub fn asset_response() -> Value {
    json!({
        "id": TEST_NID,
        "asset_file_name": "photo.jpg",
        "asset_file_mime_type": "image/jpeg",
        "caption": "A caption",
        "headline": "A headline"
    })
}

/// Canned two-commit history response.
pub fn history_response() -> Value {
    json!({
        "nid": TEST_NID,
        "commits": [
            {
                "assetTreeCid": "bafy-tree-1",
                "txHash": "0x01",
                "author": "0xaaa",
                "committer": "0xbbb",
                "timestampCreated": 1_700_000_100,
                "action": "registered"
            },
            {
                "assetTreeCid": "bafy-tree-2",
                "txHash": "0x02",
                "author": "0xaaa",
                "committer": "0xccc",
                "timestampCreated": 1_700_000_200,
                "action": "updated"
            }
        ]
    })
}
