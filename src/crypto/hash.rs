//! SHA-256 content hashing.

use sha2::{Digest, Sha256};

/// 32-byte SHA-256 digest.
pub type Hash256 = [u8; 32];

/// Hash raw bytes with SHA-256.
pub fn sha256(data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hex-encoded SHA-256, the form carried in integrity proofs.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
