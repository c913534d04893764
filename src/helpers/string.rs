//! String matching utilities.
//!
//! Search is plain case-insensitive substring containment: no regex, no
//! tokenization.

/// Normalize a raw query: trim surrounding whitespace and lower-case it.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check whether `haystack` contains an already-normalized needle,
/// ignoring case.
///
/// An empty needle matches everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}
