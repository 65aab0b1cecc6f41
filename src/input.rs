//! Polymorphic file inputs and normalization.
//!
//! Registration and search accept heterogeneous file inputs; [`normalize`]
//! converts every variant into one canonical form: owned bytes plus a
//! resolved filename and MIME type. The returned bytes are always
//! independently owned (moved in or copied), so later hashing and request
//! building never alias caller memory.

use std::path::{Path, PathBuf};

use crate::error::{CaptureError, Result};
use crate::mime;

/// A file input accepted by registration and search.
///
/// Dispatch priority and failure rules:
/// 1. [`Path`](FileInput::Path) reads from disk; fails with
///    `ENVIRONMENT_UNSUPPORTED` on targets without file-system access.
/// 2. [`Named`](FileInput::Named) uses its embedded name and type, falling
///    back to extension-based resolution when the type is absent or empty.
/// 3. [`Blob`](FileInput::Blob) and [`Bytes`](FileInput::Bytes) require a
///    caller-supplied filename and fail validation without one.
#[derive(Debug, Clone)]
pub enum FileInput {
    /// Path to a file on disk.
    Path(PathBuf),
    /// In-memory bytes carrying their own name and, optionally, type.
    Named {
        bytes: Vec<u8>,
        filename: String,
        mime_type: Option<String>,
    },
    /// Anonymous in-memory blob, optionally carrying its own type.
    Blob {
        bytes: Vec<u8>,
        mime_type: Option<String>,
    },
    /// Raw byte buffer.
    Bytes(Vec<u8>),
}

impl From<PathBuf> for FileInput {
    fn from(path: PathBuf) -> Self {
        FileInput::Path(path)
    }
}

impl From<&Path> for FileInput {
    fn from(path: &Path) -> Self {
        FileInput::Path(path.to_path_buf())
    }
}

impl From<&str> for FileInput {
    fn from(path: &str) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}

impl From<String> for FileInput {
    fn from(path: String) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for FileInput {
    fn from(bytes: Vec<u8>) -> Self {
        FileInput::Bytes(bytes)
    }
}

impl From<&[u8]> for FileInput {
    fn from(bytes: &[u8]) -> Self {
        FileInput::Bytes(bytes.to_vec())
    }
}

/// A normalized file: owned bytes plus resolved name and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

/// Normalize a file input, resolving filename and MIME type.
///
/// `filename_override` is required for [`FileInput::Blob`] and
/// [`FileInput::Bytes`]; it is ignored for the self-describing variants.
pub async fn normalize(
    input: FileInput,
    filename_override: Option<&str>,
) -> Result<NormalizedFile> {
    match input {
        FileInput::Path(path) => normalize_path(path).await,
        FileInput::Named {
            bytes,
            filename,
            mime_type,
        } => {
            let mime_type = resolve_mime(mime_type, &filename);
            Ok(NormalizedFile {
                bytes,
                filename,
                mime_type,
            })
        }
        FileInput::Blob { bytes, mime_type } => {
            let filename = required_filename(filename_override)?;
            let mime_type = resolve_mime(mime_type, &filename);
            Ok(NormalizedFile {
                bytes,
                filename,
                mime_type,
            })
        }
        FileInput::Bytes(bytes) => {
            let filename = required_filename(filename_override)?;
            let mime_type = mime::mime_type_for(&filename).to_string();
            Ok(NormalizedFile {
                bytes,
                filename,
                mime_type,
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn normalize_path(path: PathBuf) -> Result<NormalizedFile> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CaptureError::validation(format!("invalid file path: {}", path.display())))?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CaptureError::validation(format!("File not found: {}", path.display()))
        } else {
            CaptureError::validation(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let mime_type = mime::mime_type_for(&filename).to_string();
    Ok(NormalizedFile {
        bytes,
        filename,
        mime_type,
    })
}

#[cfg(target_arch = "wasm32")]
async fn normalize_path(_path: PathBuf) -> Result<NormalizedFile> {
    Err(CaptureError::environment_unsupported(
        "file paths require file-system access, which this environment does not provide",
    ))
}

fn required_filename(filename_override: Option<&str>) -> Result<String> {
    filename_override
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| CaptureError::validation("filename is required for binary input"))
}

fn resolve_mime(declared: Option<String>, filename: &str) -> String {
    match declared.filter(|mime_type| !mime_type.is_empty()) {
        Some(mime_type) => mime_type,
        None => mime::mime_type_for(filename).to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
