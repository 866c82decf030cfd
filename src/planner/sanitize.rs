//! Normalisation of untrusted model text before it is parsed.
//!
//! Rules, applied in order:
//!
//! 1. Trim surrounding whitespace.
//! 2. Remove every [`FENCE_MARKERS`] occurrence, longest marker first, then trim.
//! 3. If the first `{` is not at position 0, drop everything before it, then trim.
//!
//! The result is best effort. It is never an error for this step to leave text
//! that still fails to parse; the parser turns that into the fallback plan.

/// Markdown fence markers stripped from model output.
pub const FENCE_MARKERS: [&str; 2] = ["```json", "```"];

pub fn strip_code_fences(text: &str) -> String {
    FENCE_MARKERS
        .iter()
        .fold(text.trim().to_string(), |acc, marker| acc.replace(marker, ""))
        .trim()
        .to_string()
}

/// Drops any preamble before the first `{`. Text without a `{` is returned
/// trimmed but otherwise untouched.
pub fn drop_leading_preamble(text: &str) -> &str {
    let text = text.trim();
    match text.find('{') {
        Some(idx) if idx > 0 => text[idx..].trim(),
        _ => text,
    }
}

/// Applies every rule above.
pub fn sanitize_model_text(text: &str) -> String {
    drop_leading_preamble(&strip_code_fences(text)).to_string()
}
