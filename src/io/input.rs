use std::path::Path;

use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

use crate::error::ConvertError;
use crate::models::{CaptionItem, FragmentKind};

// Structural markers of the huddle event log export. The viewer renders one
// virtual-list entry per caption fragment; the inner classes are stable
// across exports.
const ITEM_SELECTOR: &str = "div.c-virtual_list__item";
const TIMESTAMP_SELECTOR: &str = "span.p-huddle_event_log__timestamp";
const MEMBER_NAME_SELECTOR: &str = "div.p-huddle_event_log__member_name";
const TRANSCRIPTION_SELECTOR: &str = "span.p-huddle_event_log__transcription";
const META_TEXT_SELECTOR: &str = "span.p-huddle_event_log__meta_text";

/// Parse an exported caption log file into an ordered item sequence.
pub fn parse_export_file(path: &Path) -> Result<Vec<CaptionItem>> {
    let html = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConvertError::FileNotFound(path.to_path_buf())
        } else {
            ConvertError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_export_html(&html)
}

/// Parse exported caption log markup into an ordered item sequence.
///
/// Malformed entries are not rejected: an entry missing a timestamp, name,
/// or content fragment simply yields an item with those fields absent, and
/// the turn builder skips what it cannot use. When an entry somehow carries
/// both a transcription and a meta fragment, the transcription wins.
pub fn parse_export_html(html: &str) -> Result<Vec<CaptionItem>> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let items = document
        .select(&selectors.item)
        .map(|entry| extract_item(entry, &selectors))
        .collect();

    Ok(items)
}

fn extract_item(entry: ElementRef<'_>, selectors: &Selectors) -> CaptionItem {
    let timestamp = first_text(entry, &selectors.timestamp);
    let speaker = first_text(entry, &selectors.member_name);

    let (kind, content) = if let Some(text) = first_text(entry, &selectors.transcription) {
        (Some(FragmentKind::Message), text)
    } else if let Some(text) = first_text(entry, &selectors.meta_text) {
        (Some(FragmentKind::Event), text)
    } else {
        (None, String::new())
    };

    CaptionItem {
        timestamp,
        speaker,
        kind,
        content,
    }
}

/// Trimmed text of the first element matching the selector, if any.
fn first_text(entry: ElementRef<'_>, selector: &Selector) -> Option<String> {
    entry
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

struct Selectors {
    item: Selector,
    timestamp: Selector,
    member_name: Selector,
    transcription: Selector,
    meta_text: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            item: css(ITEM_SELECTOR)?,
            timestamp: css(TIMESTAMP_SELECTOR)?,
            member_name: css(MEMBER_NAME_SELECTOR)?,
            transcription: css(TRANSCRIPTION_SELECTOR)?,
            meta_text: css(META_TEXT_SELECTOR)?,
        })
    }
}

fn css(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow!("invalid selector '{selector}': {e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        <html><body><div class="p-huddle_event_log">
          <div class="c-virtual_list__item">
            <span class="p-huddle_event_log__timestamp">10:00</span>
            <div class="p-huddle_event_log__member_name">Ana</div>
            <span class="p-huddle_event_log__transcription"> Morning everyone </span>
          </div>
          <div class="c-virtual_list__item">
            <div class="p-huddle_event_log__member_name">Ana</div>
            <span class="p-huddle_event_log__transcription">let's get started</span>
          </div>
          <div class="c-virtual_list__item">
            <span class="p-huddle_event_log__timestamp">10:01</span>
            <div class="p-huddle_event_log__member_name">Ben</div>
            <span class="p-huddle_event_log__meta_text">joined the huddle</span>
          </div>
          <div class="c-virtual_list__item">
            <span class="p-huddle_event_log__timestamp">10:02</span>
          </div>
        </div></body></html>
    "#;

    #[test]
    fn test_parse_export_html() {
        let items = parse_export_html(SAMPLE).unwrap();

        assert_eq!(items.len(), 4);

        assert_eq!(items[0].timestamp.as_deref(), Some("10:00"));
        assert_eq!(items[0].speaker.as_deref(), Some("Ana"));
        assert_eq!(items[0].kind, Some(FragmentKind::Message));
        assert_eq!(items[0].content, "Morning everyone");

        assert!(items[1].timestamp.is_none());
        assert_eq!(items[1].content, "let's get started");

        assert_eq!(items[2].kind, Some(FragmentKind::Event));
        assert_eq!(items[2].content, "joined the huddle");

        // Bare timestamp entry: no speaker, no fragment, timestamp kept.
        assert_eq!(items[3].timestamp.as_deref(), Some("10:02"));
        assert!(items[3].speaker.is_none());
        assert_eq!(items[3].kind, None);
    }

    #[test]
    fn test_transcription_wins_over_meta_text() {
        let html = r#"
          <div class="c-virtual_list__item">
            <div class="p-huddle_event_log__member_name">Ana</div>
            <span class="p-huddle_event_log__transcription">spoken</span>
            <span class="p-huddle_event_log__meta_text">event</span>
          </div>
        "#;

        let items = parse_export_html(html).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, Some(FragmentKind::Message));
        assert_eq!(items[0].content, "spoken");
    }

    #[test]
    fn test_empty_document() {
        let items = parse_export_html("<html><body></body></html>").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let items = parse_export_file(file.path()).unwrap();
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = parse_export_file(Path::new("/no/such/export.html")).unwrap_err();
        let convert = err.downcast_ref::<ConvertError>().unwrap();
        assert!(matches!(convert, ConvertError::FileNotFound(_)));
    }
}
