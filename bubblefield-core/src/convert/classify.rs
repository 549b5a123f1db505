use std::path::Path;

/// Image formats browsers render natively; left untouched by the batch job.
pub const IMAGE_SAFE_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"];

/// Video containers browsers play natively; left untouched by the batch job.
pub const VIDEO_SAFE_EXTS: &[&str] = &["mp4", "webm", "ogg"];

/// Formats that get the image conversion (WebP + JPEG fallback).
pub const IMAGE_CONVERT_EXTS: &[&str] = &["heic", "heif"];

/// Containers that get re-encoded to MP4.
pub const VIDEO_CONVERT_EXTS: &[&str] = &["mov", "avi", "mkv", "wmv"];

/// How the batch job treats one file, decided purely by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileClass {
    /// Already web-safe image; skip.
    WebSafeImage,
    /// Already web-safe video; skip.
    WebSafeVideo,
    /// Needs the image conversion path (HEIC/HEIF).
    NeedsImageConversion,
    /// Needs the video re-encode path.
    NeedsVideoConversion,
    /// Unrecognized extension; best-effort image conversion.
    Unknown,
}

/// Classify a file by its extension (case-insensitive).
pub fn classify(path: &Path) -> FileClass {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let ext = ext.as_str();

    if IMAGE_SAFE_EXTS.contains(&ext) {
        FileClass::WebSafeImage
    } else if VIDEO_SAFE_EXTS.contains(&ext) {
        FileClass::WebSafeVideo
    } else if IMAGE_CONVERT_EXTS.contains(&ext) {
        FileClass::NeedsImageConversion
    } else if VIDEO_CONVERT_EXTS.contains(&ext) {
        FileClass::NeedsVideoConversion
    } else {
        FileClass::Unknown
    }
}

/// Hidden files (leading dot) are ignored by the directory scan.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
#[path = "../../tests/unit/convert/classify.rs"]
mod tests;
