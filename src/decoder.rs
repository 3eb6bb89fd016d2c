//! Image decoding via an explicit decoder registry.
//!
//! Instead of relying on ambient codec registration, the fetcher is
//! configured with a `DecoderRegistry` value listing the formats it accepts.
//! The default registry supports GIF, JPEG and PNG.

use image::{DynamicImage, ImageFormat};

/// Failure to decode a byte stream into a bitmap.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// No registered decoder recognized the byte stream.
    #[error("no registered decoder recognized the byte stream")]
    UnrecognizedFormat,

    /// The stream was recognized as a format the registry does not carry.
    #[error("format {0:?} is not registered")]
    UnregisteredFormat(ImageFormat),

    /// The format was recognized but the stream failed to decode.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// A decoded bitmap together with its reported format name.
#[derive(Debug)]
pub struct DecodedImage {
    /// Short lowercase format name (`"gif"`, `"jpeg"`, `"png"`, ...).
    pub format: &'static str,

    /// The decoded bitmap.
    pub image: DynamicImage,
}

/// Registry of image formats the fetcher is willing to decode.
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    formats: Vec<ImageFormat>,
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DecoderRegistry {
    /// Registry with the baseline formats: GIF, JPEG and PNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            formats: vec![ImageFormat::Gif, ImageFormat::Jpeg, ImageFormat::Png],
        }
    }

    /// Registry with no formats registered. Useful as a starting point for
    /// a restricted configuration.
    #[must_use]
    pub fn empty() -> Self {
        Self { formats: Vec::new() }
    }

    /// Register an additional format. Registering a format twice is a no-op.
    pub fn register(&mut self, format: ImageFormat) {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
    }

    /// Whether `format` is registered.
    #[must_use]
    pub fn is_registered(&self, format: ImageFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Decode a byte stream into a bitmap plus format name.
    ///
    /// The stream is sniffed first; a stream recognized as an unregistered
    /// format is refused outright. When sniffing fails, each registered
    /// decoder is tried in registration order.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
        if let Ok(sniffed) = image::guess_format(bytes) {
            if !self.is_registered(sniffed) {
                return Err(DecodeError::UnregisteredFormat(sniffed));
            }
            let image = image::load_from_memory_with_format(bytes, sniffed)?;
            return Ok(DecodedImage {
                format: format_name(sniffed),
                image,
            });
        }

        for format in &self.formats {
            if let Ok(image) = image::load_from_memory_with_format(bytes, *format) {
                return Ok(DecodedImage {
                    format: format_name(*format),
                    image,
                });
            }
        }

        Err(DecodeError::UnrecognizedFormat)
    }
}

fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Gif => "gif",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}
