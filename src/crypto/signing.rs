//! Integrity proofs and EIP-191 signing for asset registration.
//!
//! A registration may carry a signed integrity proof: the asset bytes are
//! hashed, wrapped in an [`IntegrityProof`], and the hex SHA-256 of the
//! proof's canonical JSON (`integrity_sha`) is signed as an Ethereum
//! personal message. Note the distinction: `integrity_sha` covers the
//! serialized proof, not the asset bytes.

use alloy::primitives::{Address, Signature};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::crypto::hash::sha256_hex;
use crate::error::{CaptureError, Result};

/// Identifier reported in the `provider` field of every signature record.
pub const SIGNATURE_PROVIDER: &str = "capture-sdk";

// ============================================================================
// Integrity Proof
// ============================================================================

/// Integrity proof over one asset version.
///
/// `created_at` is wall-clock time at proof-build time; the server never
/// confirms it and downstream consumers must not treat it as authoritative.
/// Build the proof immediately before use to avoid skew.
///
/// Field order is load-bearing: the canonical serialization hashed into
/// `integrity_sha` is the compact JSON of these fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityProof {
    /// Hex-encoded SHA-256 of the asset bytes.
    pub proof_hash: String,
    /// MIME type of the asset.
    pub asset_mime_type: String,
    /// Epoch milliseconds at proof creation.
    pub created_at: i64,
}

impl IntegrityProof {
    /// Create a proof with the current wall-clock timestamp.
    pub fn new(proof_hash: impl Into<String>, asset_mime_type: impl Into<String>) -> Self {
        Self {
            proof_hash: proof_hash.into(),
            asset_mime_type: asset_mime_type.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Compact canonical JSON, used both for integrity hashing and as the
    /// `signed_metadata` form field.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("integrity proof serialization is infallible")
    }
}

/// Compute the content hash of `bytes` and assemble a proof record.
pub fn build_integrity_proof(bytes: &[u8], mime_type: &str) -> IntegrityProof {
    IntegrityProof::new(sha256_hex(bytes), mime_type)
}

// ============================================================================
// Asset Signature
// ============================================================================

/// Signature record attached to a registration.
///
/// Serializes with the camelCase field names the registration API expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSignature {
    /// Hex-encoded SHA-256 of the asset bytes (copied from the proof).
    pub proof_hash: String,
    /// Always [`SIGNATURE_PROVIDER`].
    pub provider: String,
    /// 0x-prefixed hex of the 65-byte recoverable signature.
    pub signature: String,
    /// EIP-55 checksummed address derived from the signing key.
    pub public_key: String,
    /// Hex SHA-256 of the proof's canonical JSON. This hashes the serialized
    /// proof, not the asset bytes.
    pub integrity_sha: String,
}

impl AssetSignature {
    /// JSON-encoded single-element list, the registration wire format.
    pub fn to_wire_list(&self) -> String {
        serde_json::to_string(std::slice::from_ref(self))
            .expect("signature serialization is infallible")
    }
}

/// Sign an integrity proof with an Ethereum private key.
///
/// The key is accepted with or without a `0x` prefix. The signed message is
/// the hex `integrity_sha` string, signed under the EIP-191 personal-message
/// convention. A malformed key fails with a validation error; this is fatal
/// and never retried.
pub fn sign_integrity_proof(proof: &IntegrityProof, private_key: &str) -> Result<AssetSignature> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|_| CaptureError::validation("invalid private key"))?;

    let integrity_sha = sha256_hex(proof.canonical_json().as_bytes());

    let signature = signer
        .sign_message_sync(integrity_sha.as_bytes())
        .map_err(|e| CaptureError::validation(format!("signing failed: {e}")))?;

    Ok(AssetSignature {
        proof_hash: proof.proof_hash.clone(),
        provider: SIGNATURE_PROVIDER.to_string(),
        signature: format!("0x{}", hex::encode(signature.as_bytes())),
        public_key: signer.address().to_string(),
        integrity_sha,
    })
}

/// Verify an EIP-191 signature against a message and expected signer.
///
/// Recovery-based: the signer address is recovered from the signature and
/// compared (case-insensitively) with `expected_address`. Malformed input
/// yields `false`, never an error.
pub fn verify_signature(message: &str, signature: &str, expected_address: &str) -> bool {
    let signature: Signature = match signature.parse() {
        Ok(signature) => signature,
        Err(_) => return false,
    };
    let recovered = match signature.recover_address_from_msg(message.as_bytes()) {
        Ok(address) => address,
        Err(_) => return false,
    };
    let expected: Address = match expected_address.parse() {
        Ok(address) => address,
        Err(_) => return false,
    };
    recovered == expected
}

// ============================================================================
// Tests
// ============================================================================
