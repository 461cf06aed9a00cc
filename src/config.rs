use crate::error::{Error, Result};
use crate::tcg::mtg::MtgApi;
use directories::BaseDirs;
use std::path::PathBuf;

/// Settings for one fetch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Directory scanned for `.dck` files
    pub deck_dir: PathBuf,
    /// Directory receiving `<name>.fullborder.jpg` files
    pub output_dir: PathBuf,
    pub api_base: String,
    /// Log and skip failed image downloads instead of aborting
    pub guard_downloads: bool,
}

impl FetchConfig {
    pub fn new(deck_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            deck_dir: resolve_deck_dir(deck_dir)?,
            output_dir: output_dir
                .or_else(default_output_dir)
                .ok_or(Error::MissingDirectory("output directory"))?,
            api_base: MtgApi::DEFAULT_BASE_URL.to_string(),
            guard_downloads: false,
        })
    }
}

pub fn resolve_deck_dir(deck_dir: Option<PathBuf>) -> Result<PathBuf> {
    deck_dir
        .or_else(default_deck_dir)
        .ok_or(Error::MissingDirectory("deck directory"))
}

/// Forge's commander deck folder, e.g. `~/Library/Application Support/Forge/decks/commander`
pub fn default_deck_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.data_dir()
            .join("Forge")
            .join("decks")
            .join("commander")
    })
}

/// Forge's card picture cache, e.g. `~/Library/Caches/Forge/pics/cards`
pub fn default_output_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| {
        dirs.cache_dir()
            .join("Forge")
            .join("pics")
            .join("cards")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directories_win() {
        let config = FetchConfig::new(Some("/decks".into()), Some("/pics".into())).unwrap();
        assert_eq!(config.deck_dir, PathBuf::from("/decks"));
        assert_eq!(config.output_dir, PathBuf::from("/pics"));
        assert_eq!(config.api_base, "https://api.scryfall.com");
        assert!(!config.guard_downloads);
    }

    #[test]
    fn defaults_point_into_forge_folders() {
        if let Some(dir) = default_deck_dir() {
            assert!(dir.ends_with("Forge/decks/commander"));
        }
        if let Some(dir) = default_output_dir() {
            assert!(dir.ends_with("Forge/pics/cards"));
        }
    }
}
