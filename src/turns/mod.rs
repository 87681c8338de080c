use crate::filters::{redact, strip_fillers};
use crate::models::{CaptionItem, FilterConfig, FragmentKind, Turn};

/// The open turn being accumulated.
///
/// Speaker and kind always change in lockstep: a kind change alone (same
/// speaker) starts a new turn, as does a speaker change alone. Holding both
/// inside one optional value makes the partial state unrepresentable.
#[derive(Debug)]
struct OpenTurn {
    speaker: String,
    kind: FragmentKind,
    text: String,
}

impl OpenTurn {
    fn flush(self, timestamp: &Option<String>) -> Turn {
        Turn {
            timestamp: timestamp.clone(),
            speaker: self.speaker,
            kind: self.kind,
            text: self.text,
        }
    }
}

/// Fold an ordered sequence of caption items into merged speaker turns.
///
/// Consecutive qualifying items with the same (speaker, kind) pair are
/// space-joined into one turn. Filler removal and redaction run per message
/// fragment before the merging decision. Items with no fragment or no
/// speaker are skipped, but their timestamp markers are still tracked.
///
/// A flushed turn carries the most recent timestamp seen at flush time,
/// i.e. the timestamp of the last item merged into it, not the first. This
/// mirrors the export viewer's own labelling and is deliberate.
///
/// Total over any input: malformed items are policy-skipped, never rejected.
pub fn build_turns(items: &[CaptionItem], config: &FilterConfig) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut current_timestamp: Option<String> = None;
    let mut open: Option<OpenTurn> = None;

    for item in items {
        // Timestamp tracking happens before any qualification check, so
        // even skipped items advance the clock.
        if let Some(ts) = &item.timestamp {
            current_timestamp = Some(ts.clone());
        }

        let Some(speaker) = item.speaker.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(kind) = item.kind else {
            continue;
        };

        let content = match kind {
            FragmentKind::Message => {
                let filtered = if config.remove_fillers {
                    match strip_fillers(&item.content, &config.filler_words) {
                        Some(text) => text,
                        // Fully-filler fragment: contributes nothing and
                        // leaves the open turn untouched.
                        None => continue,
                    }
                } else {
                    item.content.clone()
                };
                redact(&filtered, &config.redact_words)
            }
            FragmentKind::Event => item.content.clone(),
        };

        let continues = open
            .as_ref()
            .is_some_and(|turn| turn.speaker == speaker && turn.kind == kind);

        if continues {
            if let Some(turn) = open.as_mut() {
                turn.text.push(' ');
                turn.text.push_str(&content);
            }
        } else {
            if let Some(turn) = open.take() {
                turns.push(turn.flush(&current_timestamp));
            }
            open = Some(OpenTurn {
                speaker: speaker.to_string(),
                kind,
                text: content,
            });
        }
    }

    if let Some(turn) = open {
        turns.push(turn.flush(&current_timestamp));
    }

    turns
}
