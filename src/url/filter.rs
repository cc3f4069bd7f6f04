use url::Url;

/// Default excluded file extensions (common binary/document/media types)
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".zip", ".rar", ".tar", ".gz",
    ".7z", ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".ico", ".mp3", ".mp4", ".avi",
    ".mov", ".wmv", ".exe", ".dmg", ".pkg", ".deb", ".rpm",
];

/// URL substrings that indicate binary or script content
const BINARY_INDICATORS: &[&str] = &[
    "/download/",
    "/files/",
    "/assets/",
    "/media/",
    "blob:",
    "data:",
    "javascript:",
];

/// Checks whether a discovered link should be excluded from the crawl.
///
/// A URL is excluded when its path (case-insensitive) ends with any of the
/// configured extensions, or when the URL contains one of the fixed
/// binary/script indicator substrings. This is a coarse string heuristic,
/// not a content-type check.
pub fn is_excluded_url(url: &Url, exclude_extensions: &[String]) -> bool {
    let path = url.path().to_lowercase();
    if exclude_extensions.iter().any(|ext| path.ends_with(ext.as_str())) {
        return true;
    }

    let full = url.as_str().to_lowercase();
    BINARY_INDICATORS.iter().any(|marker| full.contains(marker))
}
