//! Typed errors for the Capture SDK.
//!
//! Every failure surfaces as a single [`CaptureError`] carrying a stable
//! machine-readable [`ErrorCode`], a human-readable message, and, when the
//! error originated from an HTTP response, the status code and the NID of
//! the asset involved.

use thiserror::Error;

// ============================================================================
// Error Codes
// ============================================================================

/// Stable error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed caller input or a 400 response.
    Validation,
    /// Invalid or missing authentication token (401).
    Authentication,
    /// Insufficient rights for the requested operation (403).
    Permission,
    /// The requested asset does not exist (404).
    NotFound,
    /// The wallet lacks funds for the requested operation (400 with a
    /// funds-related server message).
    InsufficientFunds,
    /// Transport failure or an unmapped non-success status.
    Network,
    /// Tree retrieval found no commits for the asset.
    NoCommits,
    /// The current environment cannot satisfy the request (e.g. file-system
    /// access for a path input on a sandboxed target).
    EnvironmentUnsupported,
}

impl ErrorCode {
    /// The stable string form of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_ERROR",
            ErrorCode::Authentication => "AUTHENTICATION_ERROR",
            ErrorCode::Permission => "PERMISSION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ErrorCode::Network => "NETWORK_ERROR",
            ErrorCode::NoCommits => "NO_COMMITS",
            ErrorCode::EnvironmentUnsupported => "ENVIRONMENT_UNSUPPORTED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for all SDK operations.
///
/// Messages never contain tokens, private keys, or stack traces.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CaptureError {
    /// Machine-readable error code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// HTTP status, when the error came from a response.
    pub status: Option<u16>,
    /// NID of the asset involved, when known.
    pub nid: Option<String>,
}

impl CaptureError {
    /// Create an error with a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            nid: None,
        }
    }

    /// A locally-raised validation error (no HTTP status).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// A transport or unmapped-status error.
    pub fn network(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            status,
            ..Self::new(ErrorCode::Network, message)
        }
    }

    /// The domain error raised when tree retrieval finds no commits.
    pub fn no_commits() -> Self {
        Self {
            status: Some(404),
            ..Self::new(ErrorCode::NoCommits, "No commits found for asset")
        }
    }

    /// Raised when the current environment cannot satisfy the request.
    pub fn environment_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EnvironmentUnsupported, message)
    }

    /// Attach the NID of the asset involved.
    pub fn with_nid(mut self, nid: impl Into<String>) -> Self {
        self.nid = Some(nid.into());
        self
    }

    /// Map a non-success HTTP status to a typed error.
    ///
    /// 400 responses are split on the server message: a funds-related
    /// message becomes [`ErrorCode::InsufficientFunds`], anything else is a
    /// validation failure. 404 carries the NID when known and ignores the
    /// server message.
    pub(crate) fn from_status(status: u16, message: String, nid: Option<&str>) -> Self {
        let error = match status {
            400 if message.to_lowercase().contains("insufficient") => Self {
                status: Some(400),
                ..Self::new(ErrorCode::InsufficientFunds, message)
            },
            400 => Self {
                status: Some(400),
                ..Self::new(ErrorCode::Validation, message)
            },
            401 => Self {
                status: Some(401),
                ..Self::new(ErrorCode::Authentication, message)
            },
            403 => Self {
                status: Some(403),
                ..Self::new(ErrorCode::Permission, message)
            },
            404 => {
                let message = match nid {
                    Some(nid) => format!("Asset not found: {nid}"),
                    None => "Asset not found".to_string(),
                };
                Self {
                    status: Some(404),
                    ..Self::new(ErrorCode::NotFound, message)
                }
            }
            _ => Self::network(message, Some(status)),
        };
        match nid {
            Some(nid) => error.with_nid(nid),
            None => error,
        }
    }
}

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, CaptureError>;

// ============================================================================
// Tests
// ============================================================================
