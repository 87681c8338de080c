use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{FragmentKind, Turn};

/// Plain-text view of the conversation log.
pub struct TextLog<'a> {
    turns: &'a [Turn],
}

impl<'a> TextLog<'a> {
    pub fn new(turns: &'a [Turn]) -> Self {
        Self { turns }
    }

    /// Format all turns as text blocks.
    ///
    /// Message turns render as `"{timestamp} {speaker}: {text}"`, event
    /// turns the same without the colon. A missing timestamp renders empty
    /// (the field is preserved, so the leading space remains). Every block
    /// is followed by a blank line, which is what visually separates turns.
    pub fn format(&self) -> String {
        let mut output = String::new();
        for turn in self.turns {
            output.push_str(&format_turn(turn));
        }
        output
    }

    /// Write to a text file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn format_turn(turn: &Turn) -> String {
    let timestamp = turn.timestamp.as_deref().unwrap_or("");
    match turn.kind {
        FragmentKind::Message => {
            format!("{} {}: {}\n\n", timestamp, turn.speaker, turn.text)
        }
        FragmentKind::Event => {
            format!("{} {} {}\n\n", timestamp, turn.speaker, turn.text)
        }
    }
}

/// Machine-readable view of the conversation log.
#[derive(Debug, Clone, Serialize)]
pub struct JsonLog<'a> {
    /// Merged turns in order
    pub turns: &'a [Turn],
    /// Summary of the conversion
    pub metadata: LogMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogMetadata {
    pub total_items: usize,
    pub total_turns: usize,
    pub message_turns: usize,
    pub event_turns: usize,
}

impl<'a> JsonLog<'a> {
    pub fn new(turns: &'a [Turn], total_items: usize) -> Self {
        let message_turns = turns
            .iter()
            .filter(|t| t.kind == FragmentKind::Message)
            .count();
        Self {
            turns,
            metadata: LogMetadata {
                total_items,
                total_turns: turns.len(),
                message_turns,
                event_turns: turns.len() - message_turns,
            },
        }
    }

    /// Write to a JSON file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}
