//! URL helpers for the Verify Engine.
//!
//! The Verify Engine provides a web interface for searching and viewing
//! digital asset provenance; these helpers build links into it.

/// Verify Engine base URL.
pub const VERIFY_BASE_URL: &str = "https://verify.numbersprotocol.io";

/// Search URL for finding an asset by its NID.
///
/// ```
/// let url = capture_sdk::verify::search_by_nid("bafybei123");
/// assert_eq!(url, "https://verify.numbersprotocol.io/search?nid=bafybei123");
/// ```
pub fn search_by_nid(nid: &str) -> String {
    format!("{VERIFY_BASE_URL}/search?nid={nid}")
}

/// Search URL for finding an asset by its NFT token and contract.
///
/// ```
/// let url = capture_sdk::verify::search_by_nft("123", "0x1234");
/// assert_eq!(url, "https://verify.numbersprotocol.io/search?nft=123&contract=0x1234");
/// ```
pub fn search_by_nft(token_id: &str, contract: &str) -> String {
    format!("{VERIFY_BASE_URL}/search?nft={token_id}&contract={contract}")
}

/// URL of an asset's profile page.
pub fn asset_profile(nid: &str) -> String {
    format!("{VERIFY_BASE_URL}/asset-profile?nid={nid}")
}

/// URL of an asset's profile page, located by NFT token and contract.
pub fn asset_profile_by_nft(token_id: &str, contract: &str) -> String {
    format!("{VERIFY_BASE_URL}/asset-profile?nft={token_id}&contract={contract}")
}
