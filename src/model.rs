//! Core data types for discovered and resolved images.

use serde::{Deserialize, Serialize};

/// An image reference discovered on a page, before fetch and decode.
///
/// Produced by the extractor, one per matched HTML element. The `url` field is
/// always normalized to fully-qualified absolute form before storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCandidate {
    /// Last non-empty `/`-delimited segment of the normalized URL.
    pub name: String,

    /// Alt text from the `<img alt="...">` attribute; empty for OpenGraph
    /// candidates and images without an alt attribute.
    pub alt_text: String,

    /// Normalized absolute image URL.
    pub url: String,

    /// Whether the candidate came from an `og:image` meta declaration.
    pub is_open_graph_image: bool,
}

/// A candidate resolved by fetching and decoding the image it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// The candidate this info was resolved from.
    #[serde(flatten)]
    pub candidate: ImageCandidate,

    /// Decoder-reported format name (`"gif"`, `"jpeg"`, `"png"`, ...).
    pub format: String,

    /// Decoded bitmap width in pixels.
    pub width: u32,

    /// Decoded bitmap height in pixels.
    pub height: u32,

    /// Decoded RGBA8 pixel buffer, present only when the caller opted in via
    /// `FetchOptions::retain_pixel_data`. Owned exclusively by this value and
    /// released when it is dropped.
    #[serde(skip)]
    pub pixel_data: Option<Vec<u8>>,
}

impl ImageInfo {
    /// Pixel area of the decoded bitmap.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether this image was declared via an `og:image` meta tag.
    #[must_use]
    pub fn is_open_graph_image(&self) -> bool {
        self.candidate.is_open_graph_image
    }
}
