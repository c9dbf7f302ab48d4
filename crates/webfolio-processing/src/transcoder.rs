//! Single-item WebP transcoding.

use bytes::Bytes;
use image::GenericImageView;
use std::io::Cursor;

/// Why a single transcode attempt failed. These never abort the batch: the
/// caller records them in the ledger and moves on.
#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    /// The bytes are not a decodable image (spoofed extension, truncated
    /// upload, corrupted data).
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The WebP encoder rejected the decoded image.
    #[error("failed to encode WebP: {0}")]
    Encode(String),
}

/// Pure, stateless single-item converter: raw image bytes in, WebP bytes
/// out. The input format is guessed from content, not from the filename.
#[derive(Debug, Clone, Copy)]
pub struct ImageTranscoder {
    quality: f32,
}

impl ImageTranscoder {
    pub fn new(quality: f32) -> Self {
        Self {
            quality: quality.clamp(0.0, 100.0),
        }
    }

    /// Convert raw image bytes to WebP at the configured quality.
    pub fn transcode(&self, data: &[u8]) -> Result<Bytes, TranscodeError> {
        let img = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| TranscodeError::Decode(e.to_string()))?
            .decode()
            .map_err(|e| TranscodeError::Decode(e.to_string()))?;

        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();

        let encoder = webp::Encoder::from_rgba(&rgba, width, height);
        let encoded = encoder
            .encode_simple(false, self.quality)
            .map_err(|e| TranscodeError::Encode(format!("{:?}", e)))?;

        Ok(Bytes::copy_from_slice(&encoded))
    }
}

impl Default for ImageTranscoder {
    fn default() -> Self {
        Self::new(100.0)
    }
}
