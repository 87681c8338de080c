use serde::Serialize;

use super::FragmentKind;

/// Default filler words used when removal is enabled without an explicit list.
pub const DEFAULT_FILLER_WORDS: [&str; 2] = ["Hm", "Mhm"];

/// Marker substituted for redacted words.
pub const REDACTED_MARKER: &str = "<REDACTED>";

/// A maximal run of consecutive caption items sharing the same speaker and
/// kind, merged into one output block. Immutable once flushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// Most recent timestamp seen at flush time. This is the timestamp of
    /// the LAST item merged into the turn, not the first.
    pub timestamp: Option<String>,
    /// Speaker the turn belongs to.
    pub speaker: String,
    /// Whether the turn is spoken text or a system event.
    pub kind: FragmentKind,
    /// Space-joined fragment content, post filtering and redaction.
    pub text: String,
}

/// Content filtering applied per fragment before merging decisions.
///
/// Constructed once at the CLI boundary and passed into the pure core.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Whether filler-word removal is active for message fragments.
    pub remove_fillers: bool,
    /// Words eligible for removal, matched as whole tokens (with an
    /// optional trailing period), never as substrings.
    pub filler_words: Vec<String>,
    /// Words replaced by the redaction marker, applied in order as literal
    /// substring matches.
    pub redact_words: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            remove_fillers: false,
            filler_words: DEFAULT_FILLER_WORDS.iter().map(|w| w.to_string()).collect(),
            redact_words: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_config_default() {
        let config = FilterConfig::default();
        assert!(!config.remove_fillers);
        assert_eq!(config.filler_words, vec!["Hm", "Mhm"]);
        assert!(config.redact_words.is_empty());
    }
}
