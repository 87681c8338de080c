use crate::models::REDACTED_MARKER;

/// Replace every literal occurrence of each configured word with the
/// redaction marker.
///
/// Matching is substring-based, not word-boundary based, and words are
/// applied in configuration order. The marker contains none of the usual
/// redaction targets, so sequential replacements do not re-match each
/// other's output.
pub fn redact(content: &str, redact_words: &[String]) -> String {
    let mut text = content.to_string();
    for word in redact_words {
        text = text.replace(word.as_str(), REDACTED_MARKER);
    }
    text
}
