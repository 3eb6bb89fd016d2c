//! # thumbpick
//!
//! Thumbnail discovery and selection for web pages.
//!
//! The library walks a page for thumbnail candidates — OpenGraph `og:image`
//! declarations and plain `<img>` elements — repairs their URLs into absolute
//! form, fetches and decodes each candidate, and picks the single best
//! thumbnail: the first OpenGraph image when one exists, otherwise the
//! largest by pixel area.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use thumbpick::{scrape_thumbnail, BatchOptions};
//!
//! let best = scrape_thumbnail("https://example.com/article", &BatchOptions::default())?;
//! println!("{} ({}x{} {})", best.candidate.url, best.width, best.height, best.format);
//! # Ok::<(), thumbpick::Error>(())
//! ```
//!
//! The pipeline stages are also exposed individually: see [`extract`] for
//! candidate discovery, [`fetch`] for image-info retrieval, and [`select`]
//! for the selection policy.

mod error;
mod model;
mod options;
mod patterns;

/// Image decoding via an explicit decoder registry.
pub mod decoder;

/// Image candidate extraction from a web page.
pub mod extract;

/// Image retrieval and decoding over HTTP.
pub mod fetch;

/// Page fetching and DOM matching.
pub mod page;

/// Thumbnail selection policy.
pub mod select;

/// Best-effort URL repair for discovered image references.
pub mod url_utils;

use tracing::warn;

// Public API - re-exports
pub use decoder::{DecodeError, DecoderRegistry};
pub use error::{Error, Result};
pub use extract::{extract_image_nodes, image_nodes_from_html};
pub use fetch::ImageFetcher;
pub use model::{ImageCandidate, ImageInfo};
pub use options::{BatchOptions, FetchOptions};
pub use select::select_thumbnail;

/// Scrape a page and return its single best thumbnail.
///
/// Runs the full pipeline: extract candidates from `page_url`, fetch and
/// decode each one under `options`, and select the winner. A page fetch
/// error with no extracted candidates is returned as-is; with a partial
/// candidate list the error is logged and the pipeline continues
/// best-effort.
///
/// # Errors
///
/// Propagates the first batch failure when `options.require_all_succeed` is
/// set, and `Error::EmptyInput` when no candidate could be fetched and
/// decoded.
pub fn scrape_thumbnail(page_url: &str, options: &BatchOptions) -> Result<ImageInfo> {
    let (candidates, page_error) = extract::extract_image_nodes(page_url);
    if let Some(err) = page_error {
        if candidates.is_empty() {
            return Err(err);
        }
        warn!(
            "page fetch for {page_url} ended with an error after {} candidates: {err}",
            candidates.len()
        );
    }

    let fetcher = ImageFetcher::new()?;
    let infos = fetcher.fetch_image_info_batch(&candidates, options)?;
    let best = select::select_thumbnail(&infos)?;
    Ok(best.clone())
}
