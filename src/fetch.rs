//! Image retrieval and decoding.
//!
//! `ImageFetcher` resolves an `ImageCandidate` into an `ImageInfo` by issuing
//! a blocking GET for the image bytes and decoding them through the configured
//! `DecoderRegistry`. The batch entry point drives the single-candidate path
//! over a list with skip-on-failure semantics.

use std::time::Duration;

use image::GenericImageView;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::decoder::DecoderRegistry;
use crate::error::{Error, Result};
use crate::model::{ImageCandidate, ImageInfo};
use crate::options::{BatchOptions, FetchOptions};

/// Timeout applied to each image request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches and decodes image candidates.
///
/// Holds one HTTP client and one decoder registry; both are reused across
/// calls, but no response or decoded buffer outlives the call that produced
/// it.
pub struct ImageFetcher {
    client: Client,
    registry: DecoderRegistry,
}

impl ImageFetcher {
    /// Fetcher with the baseline decoder registry (GIF, JPEG, PNG).
    pub fn new() -> Result<Self> {
        Self::with_registry(DecoderRegistry::new())
    }

    /// Fetcher with a caller-configured decoder registry.
    pub fn with_registry(registry: DecoderRegistry) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| Error::Client(err.to_string()))?;
        Ok(Self { client, registry })
    }

    /// Fetch one candidate and decode its format and dimensions.
    ///
    /// Fails with `Transport` when the request cannot complete, `HttpStatus`
    /// for any response status other than 200, and `Decode` when no
    /// registered decoder recognizes the body. The decoded pixel buffer is
    /// kept only when `options.retain_pixel_data` is set.
    pub fn fetch_image_info(
        &self,
        candidate: &ImageCandidate,
        options: &FetchOptions,
    ) -> Result<ImageInfo> {
        debug!("fetching image candidate {}", candidate.url);

        let response = self
            .client
            .get(&candidate.url)
            .send()
            .map_err(|err| Error::Transport {
                url: candidate.url.clone(),
                reason: err.to_string(),
            })?;

        // Only 200 is success; 201 and friends carry no image body we trust.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                url: candidate.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|err| Error::Transport {
            url: candidate.url.clone(),
            reason: err.to_string(),
        })?;

        let decoded = self.registry.decode(&body).map_err(|source| Error::Decode {
            url: candidate.url.clone(),
            source,
        })?;

        let (width, height) = decoded.image.dimensions();
        let pixel_data = options
            .retain_pixel_data
            .then(|| decoded.image.into_rgba8().into_raw());

        Ok(ImageInfo {
            candidate: candidate.clone(),
            format: decoded.format.to_string(),
            width,
            height,
            pixel_data,
        })
    }

    /// Fetch a list of candidates in input order.
    ///
    /// A failed candidate is skipped and logged, so the result may be shorter
    /// than the input or empty. With `options.require_all_succeed` the first
    /// failure aborts the whole batch and no partial list is returned.
    pub fn fetch_image_info_batch(
        &self,
        candidates: &[ImageCandidate],
        options: &BatchOptions,
    ) -> Result<Vec<ImageInfo>> {
        let mut infos = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match self.fetch_image_info(candidate, &options.fetch_options) {
                Ok(info) => infos.push(info),
                Err(err) if options.require_all_succeed => return Err(err),
                Err(err) => {
                    warn!("skipping image candidate {}: {err}", candidate.url);
                }
            }
        }
        Ok(infos)
    }
}
