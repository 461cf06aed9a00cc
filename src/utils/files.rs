use crate::error::{Error, Result};
use crate::tcg::{image_file_name, CardName, Face};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DECK_EXTENSION: &str = ".dck";

/// Ensure the picture directory exists before anything is written to it
pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;
        info!(dir = %output_dir.display(), "created output directory");
    }
    Ok(())
}

/// List the deck files in a directory, sorted by file name.
///
/// A deck file is any regular file whose name ends in `.dck` (case sensitive).
pub fn list_deck_files(deck_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut decks: Vec<PathBuf> = fs::read_dir(deck_dir)
        .map_err(|e| Error::io(deck_dir, e))?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let is_deck = path
                .file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.ends_with(DECK_EXTENSION));
            if is_deck && path.is_file() {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    decks.sort();
    debug!(dir = %deck_dir.display(), count = decks.len(), "found deck files");
    Ok(decks)
}

/// Full path of the image file for one face of a card
pub fn image_path(output_dir: &Path, name: &CardName, face: Face) -> PathBuf {
    output_dir.join(image_file_name(name, face))
}
