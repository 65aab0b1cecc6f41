//! MIME type resolution from filename extensions.

/// Fallback for unknown or missing extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Resolve a MIME type from a filename's final dot-delimited extension.
///
/// The lookup is a fixed table over the asset types the registration API
/// accepts; anything else resolves to [`DEFAULT_MIME_TYPE`]. Pure and total.
pub fn mime_type_for(filename: &str) -> &'static str {
    let (stem, ext) = match filename.rsplit_once('.') {
        Some(parts) => parts,
        None => return DEFAULT_MIME_TYPE,
    };
    if stem.is_empty() || ext.is_empty() {
        return DEFAULT_MIME_TYPE;
    }
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_type_for("photo.jpg"), "image/jpeg");
        assert_eq!(mime_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_type_for("image.png"), "image/png");
        assert_eq!(mime_type_for("clip.mov"), "video/quicktime");
        assert_eq!(mime_type_for("song.mp3"), "audio/mpeg");
        assert_eq!(mime_type_for("doc.pdf"), "application/pdf");
        assert_eq!(mime_type_for("data.json"), "application/json");
        assert_eq!(mime_type_for("notes.txt"), "text/plain");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(mime_type_for("PHOTO.JPG"), "image/jpeg");
        assert_eq!(mime_type_for("image.PnG"), "image/png");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_type_for("archive.tar.zst"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for("binary.exe"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_missing_extension_falls_back() {
        assert_eq!(mime_type_for("README"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for(""), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for(".gitignore"), DEFAULT_MIME_TYPE);
        assert_eq!(mime_type_for("trailing."), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_only_final_extension_counts() {
        assert_eq!(mime_type_for("photo.backup.png"), "image/png");
    }
}
