//! Processing pipeline for folder uploads: path splitting, image
//! classification, WebP transcoding, outcome accumulation, result grouping,
//! and ZIP archive building.
//!
//! Everything in this crate is pure and request-scoped; the HTTP layer wires
//! the pieces together per request and discards them with the response.

pub mod archive;
pub mod classifier;
pub mod ledger;
pub mod path;
pub mod transcoder;

pub use archive::build_zip_archive;
pub use classifier::ImageClassifier;
pub use ledger::{group_by_folder, order_records, ConversionLedger};
pub use path::{split_relative_path, webp_output_name};
pub use transcoder::{ImageTranscoder, TranscodeError};
