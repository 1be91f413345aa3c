//! Slug derivation

/// Derive a URL-safe slug from a display title.
///
/// Lowercases, strips punctuation, collapses whitespace and hyphen runs to
/// single hyphens, and trims separators at both ends. Underscores are kept
/// as-is (word characters). May return an empty string for input with no
/// usable characters; callers treat that as a validation failure.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;
    for ch in input.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_sep = true;
        }
        // remaining punctuation is stripped entirely
    }
    out
}
