//! Error types for thumbnail discovery and retrieval.
//!
//! This module defines the error taxonomy shared by the extractor, the image
//! fetcher, and the selector. No layer retries internally; retry policy, if
//! desired, belongs to the caller.

use crate::decoder::DecodeError;

/// Error type for thumbnail operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure (DNS, connect, timeout) during a page or image
    /// fetch.
    #[error("transport failure for {url}: {reason}")]
    Transport {
        /// URL the request was issued against.
        url: String,
        /// Underlying transport error, stringified.
        reason: String,
    },

    /// The server answered with a status other than the accepted one.
    #[error("unexpected HTTP status {status} for {url}")]
    HttpStatus {
        /// URL the request was issued against.
        url: String,
        /// Status code received.
        status: u16,
    },

    /// The response body was not recognized by any registered image decoder.
    #[error("failed to decode image at {url}")]
    Decode {
        /// URL the body was fetched from.
        url: String,
        /// Decoder-level failure detail.
        #[source]
        source: DecodeError,
    },

    /// Thumbnail selection was invoked with no candidates.
    #[error("no image candidates to select from")]
    EmptyInput,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Result type alias for thumbnail operations.
pub type Result<T> = std::result::Result<T, Error>;
