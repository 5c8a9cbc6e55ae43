//! Email-shape pattern with anchored validation and unanchored scanning

use regex::Regex;
use std::sync::LazyLock;

/// Grammar shared by validation and scanning.
///
/// Local part: dot-separated segments of `[a-zA-Z0-9_+&*-]`.
/// Domain: one or more `label.` groups, then a 2-7 letter top-level label.
const EMAIL_SHAPE: &str =
    r"[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}";

static ANCHORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{EMAIL_SHAPE})$")).unwrap());

static SCAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_SHAPE).unwrap());

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Only `U+0000..=U+0020` counts; Unicode spaces such as NBSP are kept.
fn trim_ascii_controls(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Check whether a string is a well-formed email address.
///
/// The input is trimmed of ASCII controls and spaces first; empty and
/// blank strings are never valid.
///
/// ```rust
/// use email_sheet::is_valid_address;
///
/// assert!(is_valid_address(" user@example.com "));
/// assert!(!is_valid_address("user@example"));
/// ```
#[must_use]
pub fn is_valid_address(s: &str) -> bool {
    let trimmed = trim_ascii_controls(s);
    !trimmed.is_empty() && ANCHORED.is_match(trimmed)
}

/// Find every non-overlapping email-shaped substring, left to right.
///
/// Matching is leftmost-first with greedy quantifiers, so two addresses
/// glued together only come apart where the top-level label cannot keep
/// growing: at a non-letter character or after seven letters.
#[must_use]
pub fn split_embedded(text: &str) -> Vec<String> {
    if trim_ascii_controls(text).is_empty() {
        return Vec::new();
    }

    SCAN.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
