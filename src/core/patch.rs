//! Single-field text patching
//!
//! Locates one capturing region in a text buffer via regex and replaces
//! exactly that region, leaving every other byte untouched. Failure to find
//! the field is an explicit `None`, never a sentinel value, so callers must
//! decide what a missing field means.

use regex::Regex;

/// Extract the text of the first capture group of the first match
pub fn extract_capture<'a>(content: &'a str, re: &Regex) -> Option<&'a str> {
    re.captures(content)?.get(1).map(|m| m.as_str())
}

/// Replace the span of the first capture group of the first match
///
/// Returns the patched buffer, or `None` when the pattern does not match or
/// has no capture group. Chained patches must each run against the buffer
/// produced by the previous call.
pub fn replace_capture(content: &str, re: &Regex, replacement: &str) -> Option<String> {
    let captures = re.captures(content)?;
    let group = captures.get(1)?;

    let mut patched = String::with_capacity(content.len() + replacement.len());
    patched.push_str(&content[..group.start()]);
    patched.push_str(replacement);
    patched.push_str(&content[group.end()..]);
    Some(patched)
}
