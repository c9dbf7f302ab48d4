//! Shared application state.
//!
//! The pipeline itself is stateless between invocations; this holds only the
//! configuration-derived collaborators every request reuses.

use webfolio_core::Config;
use webfolio_processing::{ImageClassifier, ImageTranscoder};

pub struct AppState {
    pub config: Config,
    pub classifier: ImageClassifier,
    pub transcoder: ImageTranscoder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let classifier = ImageClassifier::new(config.allowed_extensions.clone());
        let transcoder = ImageTranscoder::new(config.webp_quality);
        Self {
            config,
            classifier,
            transcoder,
        }
    }
}
