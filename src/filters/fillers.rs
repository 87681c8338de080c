/// Remove filler words from a message fragment.
///
/// Returns `None` when the fragment should be discarded entirely: either its
/// whole trimmed content equals a filler word, or every token was a filler.
/// A discarded fragment contributes nothing and must not open, close, or
/// reset a turn.
///
/// Tokens are matched exactly against each filler word and its decorated
/// forms (the word followed by a period, or a period and a space). A filler
/// word embedded inside a longer token is never stripped.
pub fn strip_fillers(content: &str, filler_words: &[String]) -> Option<String> {
    if filler_words.iter().any(|f| f == content) {
        return None;
    }

    let kept: Vec<&str> = content
        .split_whitespace()
        .filter(|token| !is_filler_token(token, filler_words))
        .collect();

    if kept.is_empty() {
        return None;
    }

    Some(kept.join(" "))
}

fn is_filler_token(token: &str, filler_words: &[String]) -> bool {
    filler_words.iter().any(|filler| {
        token == filler
            || *token == format!("{filler}.")
            || *token == format!("{filler}. ")
    })
}
