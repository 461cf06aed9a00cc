use crate::error::{Error, Result};
use crate::tcg::{CardName, Face, FaceImage};
use crate::utils::http::get_user_agent;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ImageUris {
    pub normal: String,
}

#[derive(Debug, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// Printed structure of a card. Only double-faced layouts need special handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Transform,
    ModalDfc,
    #[serde(other)]
    Other,
}

impl Layout {
    pub fn is_double_faced(self) -> bool {
        matches!(self, Layout::Transform | Layout::ModalDfc)
    }
}

/// Response of a `/cards/named` lookup, reduced to what image fetching needs
#[derive(Debug, Deserialize)]
pub struct CardRecord {
    pub layout: Layout,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Vec<CardFace>,
}

impl CardRecord {
    /// Faces to save for this layout, front first
    pub fn faces(&self) -> &'static [Face] {
        if self.layout.is_double_faced() {
            &[Face::Front, Face::Back]
        } else {
            &[Face::Front]
        }
    }

    /// The "normal" image of one face.
    ///
    /// Double-faced layouts read `card_faces`; every other layout reads the
    /// top-level `image_uris`. A record missing the expected fields is an error.
    pub fn face_image(&self, name: &CardName, face: Face) -> Result<FaceImage> {
        let uris = if self.layout.is_double_faced() {
            let index = match face {
                Face::Front => 0,
                Face::Back => 1,
            };
            self.card_faces
                .get(index)
                .ok_or_else(|| Error::MissingFace {
                    name: name.to_string(),
                    index,
                })?
                .image_uris
                .as_ref()
        } else {
            self.image_uris.as_ref()
        };

        let uris = uris.ok_or_else(|| Error::MissingImageUris {
            name: name.to_string(),
        })?;
        Ok(FaceImage {
            face,
            image_url: uris.normal.clone(),
        })
    }
}

/// Outcome of a fuzzy name lookup
#[derive(Debug)]
pub enum Lookup {
    Found(CardRecord),
    /// Scryfall answered 404: no card matches the name
    NotFound,
    /// The request could not be sent, or came back with another error status
    Failed(String),
}

pub struct MtgApi {
    base_url: String,
}

impl MtgApi {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.scryfall.com";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn named_url(&self) -> String {
        format!("{}/cards/named", self.base_url.trim_end_matches('/'))
    }

    /// Resolve a card name with Scryfall's fuzzy matching.
    ///
    /// Transport failures and error statuses are folded into the returned
    /// [`Lookup`]; only a malformed success body is returned as an error.
    pub async fn fuzzy_lookup(
        &self,
        client: &reqwest::Client,
        name: &CardName,
    ) -> Result<Lookup> {
        let url = self.named_url();
        debug!(card = %name, %url, "fuzzy lookup");

        let response = match client
            .get(&url)
            .query(&[("fuzzy", name.as_str())])
            .header("User-Agent", get_user_agent())
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(Lookup::Failed(format!("Request error: {}", e))),
        };

        let status = response.status();
        debug!(card = %name, %status, "lookup response");

        if status == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        if !status.is_success() {
            return Ok(Lookup::Failed(format!(
                "HTTP {} for URL: {}",
                status,
                response.url()
            )));
        }

        let response_text = response.text().await?;
        let record: CardRecord = serde_json::from_str(&response_text)?;
        Ok(Lookup::Found(record))
    }
}
