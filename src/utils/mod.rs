//! Utility modules for deck fetching
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: Deck discovery and output paths
//! - `images`: Card lookup and image downloading
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
pub mod images;

#[cfg(test)]
pub mod test_server;
