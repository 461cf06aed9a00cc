//! Forge deck file (.dck) parsing
//!
//! Deck files are line oriented:
//! - `[Section]` headers are ignored, whatever the section
//! - card entries look like `<count>[x] <card name>[ (<set>)]`
//!
//! Only the card names are kept. The quantity and any trailing parenthetical
//! annotation are dropped, and duplicates are preserved in file order.

use crate::error::{Error, Result};
use crate::tcg::CardName;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Lines that look like a card entry: an optional count, then a letter.
static ENTRY_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+x?\s+)?[A-Za-z]").expect("valid entry pattern"));

/// Captures the card name between the count and an optional ` (...)` suffix.
/// The trailing `\n` is required, so an unterminated last line never matches.
static ENTRY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+x?\s+(.+?)( \(.+\))?\n").expect("valid name pattern"));

/// Extract card names from the text of a deck file.
pub fn extract_card_names(content: &str) -> Vec<CardName> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split_inclusive('\n')
        .filter(|line| !is_skipped(line))
        .filter_map(|line| {
            ENTRY_NAME
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|name| CardName::new(name.as_str()))
        })
        .collect()
}

fn is_skipped(line: &str) -> bool {
    line.starts_with('[') || line.trim().is_empty() || !ENTRY_SHAPE.is_match(line)
}

/// Read a deck file from disk and extract its card names.
pub fn load_deck(path: &Path) -> Result<Vec<CardName>> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(extract_card_names(&content))
}
