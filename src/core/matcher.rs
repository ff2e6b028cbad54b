//! Include/exclude file selection
//!
//! Decides whether a relative, forward-slash path belongs in the release
//! payload. A pattern is an exact relative path, an extension pattern
//! (leading `.`), or a directory pattern (trailing `/`). All comparisons are
//! case-insensitive.

/// Check a single path against a single pattern
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if path.eq_ignore_ascii_case(pattern) {
        return true;
    }

    // Extension pattern, e.g. ".png"; the path must be longer than the
    // pattern so a bare extension never matches itself
    if pattern.len() > 1 && pattern.starts_with('.') && path.len() > pattern.len() {
        // get() rather than slicing: the cut may land inside a multi-byte
        // character, which simply isn't a suffix match
        if let Some(suffix) = path.get(path.len() - pattern.len()..) {
            if suffix.eq_ignore_ascii_case(pattern) {
                return true;
            }
        }
    }

    // Directory pattern, e.g. "Resources/Fonts/"; compares the path's
    // directory portion, everything through the last slash
    if pattern.len() > 1 && pattern.ends_with('/') {
        let dir = match path.rfind('/') {
            Some(idx) => &path[..=idx],
            None => "",
        };
        if dir.eq_ignore_ascii_case(pattern) {
            return true;
        }
    }

    false
}

/// Decide whether a path is included: it must match at least one include
/// pattern and no exclude pattern. Exclude dominates include.
pub fn should_include(path: &str, include: &[String], exclude: &[String]) -> bool {
    let mut included = false;
    for pattern in include {
        if matches_pattern(path, pattern) {
            included = true;
            break;
        }
    }
    for pattern in exclude {
        if matches_pattern(path, pattern) {
            included = false;
            break;
        }
    }
    included
}
