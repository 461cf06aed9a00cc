use std::fmt;

/// A card name as written in a deck file, with count and set annotation removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardName(String);

impl CardName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which printed face an image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

// One image to save: where it comes from and which face it shows
#[derive(Debug, Clone)]
pub struct FaceImage {
    pub face: Face,
    pub image_url: String,
}

/// File name used for a card face in the picture cache.
///
/// The back face of a double-faced card gets a ` (back)` suffix on the name.
pub fn image_file_name(name: &CardName, face: Face) -> String {
    match face {
        Face::Front => format!("{}.fullborder.jpg", name),
        Face::Back => format!("{} (back).fullborder.jpg", name),
    }
}

pub mod mtg;
