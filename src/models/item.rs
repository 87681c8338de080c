use serde::Serialize;

/// Kind of content a caption item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Spoken transcription text
    Message,
    /// System event text ("joined the huddle", "left the huddle", ...)
    Event,
}

/// One structural entry from the exported caption log.
///
/// Items are transient: they are produced by the extractor and consumed
/// immediately by the turn builder. An item with no fragment, or with a
/// missing speaker, contributes nothing to the output and does not affect
/// grouping state (its timestamp is still tracked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionItem {
    /// New timestamp marker, if this item carries one. Items without a
    /// marker inherit the most recently seen timestamp.
    pub timestamp: Option<String>,
    /// Member name, required for the item to contribute to output.
    pub speaker: Option<String>,
    /// What the content fragment is; `None` means the item is skipped.
    pub kind: Option<FragmentKind>,
    /// Raw trimmed fragment text, before filtering or redaction.
    pub content: String,
}

impl CaptionItem {
    /// A spoken-message item with no timestamp marker.
    pub fn message(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            speaker: Some(speaker.into()),
            kind: Some(FragmentKind::Message),
            content: content.into(),
        }
    }

    /// A system-event item with no timestamp marker.
    pub fn event(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            speaker: Some(speaker.into()),
            kind: Some(FragmentKind::Event),
            content: content.into(),
        }
    }

    /// Attach a timestamp marker to this item.
    pub fn at(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let item = CaptionItem::message("Ana", "hello").at("10:02");
        assert_eq!(item.speaker.as_deref(), Some("Ana"));
        assert_eq!(item.kind, Some(FragmentKind::Message));
        assert_eq!(item.timestamp.as_deref(), Some("10:02"));

        let item = CaptionItem::event("Ben", "left the huddle");
        assert_eq!(item.kind, Some(FragmentKind::Event));
        assert!(item.timestamp.is_none());
    }
}
