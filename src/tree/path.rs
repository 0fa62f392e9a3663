//! Page path normalization utilities

use unicode_normalization::UnicodeNormalization;

/// Normalize a page path for lookups
///
/// This function:
/// 1. Trims surrounding whitespace
/// 2. Normalizes Unicode to NFC
/// 3. Removes trailing slashes (except root)
pub fn normalize_page_path(path: &str) -> String {
    let mut result: String = path.trim().nfc().collect();
    if result.len() > 1 {
        while result.len() > 1 && result.ends_with('/') {
            result.pop();
        }
    }
    result
}

/// Parent path of a normalized page path, `None` for the root and for relative names
pub fn parent_path(path: &str) -> Option<&str> {
    if path == "/" {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some("/"),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}
