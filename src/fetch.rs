use crate::config::FetchConfig;
use crate::deck::load_deck;
use crate::error::Result;
use crate::tcg::mtg::MtgApi;
use crate::tcg::CardName;
use crate::utils::files::{ensure_output_dir, list_deck_files};
use crate::utils::http::build_client;
use crate::utils::images::{CardOutcome, ImageFetcher};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Totals for a fetch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchStats {
    pub decks: usize,
    pub cards: usize,
    pub images_written: usize,
    pub not_found: usize,
    pub lookups_failed: usize,
    pub downloads_failed: usize,
}

impl FetchStats {
    fn record(&mut self, outcome: CardOutcome) {
        self.cards += 1;
        match outcome {
            CardOutcome::NotFound => self.not_found += 1,
            CardOutcome::LookupFailed => self.lookups_failed += 1,
            CardOutcome::Fetched { written, failed } => {
                self.images_written += written;
                self.downloads_failed += failed;
            }
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("Decks processed: {}", self.decks);
        println!("Cards looked up: {}", self.cards);
        println!("Images written: {}", self.images_written);
        if self.not_found > 0 {
            println!("Skipped {} cards (not found on Scryfall)", self.not_found);
        }
        if self.lookups_failed > 0 {
            println!("Failed to look up {} cards", self.lookups_failed);
        }
        if self.downloads_failed > 0 {
            println!("Failed to download {} images", self.downloads_failed);
        }
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Download the images of every card in every deck, one card at a time.
///
/// Cards that are not found or whose lookup fails are skipped. Any other
/// error stops the whole run.
pub async fn fetch_decks(config: &FetchConfig) -> Result<FetchStats> {
    fetch_decks_with(build_client()?, config).await
}

async fn fetch_decks_with(client: reqwest::Client, config: &FetchConfig) -> Result<FetchStats> {
    let decks = list_deck_files(&config.deck_dir)?;
    ensure_output_dir(&config.output_dir)?;

    let fetcher = ImageFetcher::new(
        client,
        MtgApi::new(config.api_base.clone()),
        &config.output_dir,
        config.guard_downloads,
    );

    let mut stats = FetchStats::default();
    for deck_path in decks {
        println!("\nProcessing deck: {}", deck_path.display());
        let names = load_deck(&deck_path)?;
        info!(deck = %deck_path.display(), cards = names.len(), "parsed deck");

        let pb = progress_bar(names.len());
        for name in &names {
            pb.set_message(name.to_string());
            let outcome = fetcher.fetch_card_images(name, &pb).await?;
            stats.record(outcome);
            pb.inc(1);
        }
        pb.finish_and_clear();
        stats.decks += 1;
    }

    Ok(stats)
}

/// Parse every deck in a directory without touching the network
pub fn list_decks(deck_dir: &Path) -> Result<Vec<(PathBuf, Vec<CardName>)>> {
    list_deck_files(deck_dir)?
        .into_iter()
        .map(|path| {
            let names = load_deck(&path)?;
            Ok((path, names))
        })
        .collect()
}
