use crate::error::{Error, Result};
use crate::tcg::mtg::{Lookup, MtgApi};
use crate::tcg::{image_file_name, CardName, FaceImage};
use crate::utils::files::image_path;
use crate::utils::http::get_user_agent;
use indicatif::ProgressBar;
use reqwest;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to one card name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    /// Scryfall had no match for the name
    NotFound,
    /// The lookup request failed or returned an error status
    LookupFailed,
    /// The card resolved; `failed` only counts with guarded downloads
    Fetched { written: usize, failed: usize },
}

/// Resolves card names on Scryfall and saves their images, one at a time.
pub struct ImageFetcher {
    client: reqwest::Client,
    api: MtgApi,
    output_dir: PathBuf,
    guard_downloads: bool,
}

impl ImageFetcher {
    pub fn new(
        client: reqwest::Client,
        api: MtgApi,
        output_dir: impl Into<PathBuf>,
        guard_downloads: bool,
    ) -> Self {
        Self {
            client,
            api,
            output_dir: output_dir.into(),
            guard_downloads,
        }
    }

    /// Look up a card and write one image per printed face.
    ///
    /// A missing card or a failed lookup is reported and returned as an outcome.
    /// Image download failures are fatal unless downloads are guarded. File
    /// system errors and malformed card records are always fatal. Each face is
    /// saved as soon as it resolves, so a bad back face leaves the front on disk.
    pub async fn fetch_card_images(
        &self,
        name: &CardName,
        pb: &ProgressBar,
    ) -> Result<CardOutcome> {
        let card = match self.api.fuzzy_lookup(&self.client, name).await? {
            Lookup::Found(card) => card,
            Lookup::NotFound => {
                pb.suspend(|| println!("{}", not_found_line(name)));
                return Ok(CardOutcome::NotFound);
            }
            Lookup::Failed(reason) => {
                pb.suspend(|| eprintln!("{}", error_line(name, &reason)));
                return Ok(CardOutcome::LookupFailed);
            }
        };

        let mut written = 0;
        let mut failed = 0;
        for &face in card.faces() {
            let image = card.face_image(name, face)?;
            let file_name = image_file_name(name, face);
            match self.save_face(name, &image).await {
                Ok(()) => {
                    written += 1;
                    pb.suspend(|| println!("{}", downloaded_line(&file_name)));
                }
                Err(e @ Error::Request(_)) if self.guard_downloads => {
                    failed += 1;
                    pb.suspend(|| eprintln!("{}", error_line(&file_name, &e)));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(CardOutcome::Fetched { written, failed })
    }

    async fn save_face(&self, name: &CardName, image: &FaceImage) -> Result<()> {
        let bytes = self.download_image(&image.image_url).await?;
        let path = image_path(&self.output_dir, name, image.face);
        write_image(&path, &bytes).await
    }

    /// Fetch the raw bytes behind an image URL.
    ///
    /// Unguarded downloads keep whatever body the server returned, error
    /// statuses included.
    pub async fn download_image(&self, image_url: &str) -> Result<Vec<u8>> {
        debug!(url = %image_url, "downloading image");

        let response = self
            .client
            .get(image_url)
            .header("User-Agent", get_user_agent())
            .send()
            .await?;

        let response = if self.guard_downloads {
            response.error_for_status()?
        } else {
            response
        };

        Ok(response.bytes().await?.to_vec())
    }
}

pub fn not_found_line(name: &CardName) -> String {
    format!("Skipping {} (not found on Scryfall)", name)
}

pub fn error_line(subject: impl Display, error: impl Display) -> String {
    format!("Error downloading {}: {}", subject, error)
}

pub fn downloaded_line(file_name: &str) -> String {
    format!("Downloaded {}", file_name)
}

/// Write an image, replacing any file already at `path`
pub async fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| Error::io(path, e))
}
