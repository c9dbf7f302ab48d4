//! Domain models for the upload-and-transcode pipeline.
//!
//! All of these are request-scoped: an [`UploadedItem`] lives from multipart
//! parsing until classification, a [`ConversionRecord`] from a successful
//! transcode until it is serialized into the archive and the response, and
//! the [`UploadResponse`] is the terminal document returned to the caller.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One file received in the multipart submission, before classification.
#[derive(Debug, Clone)]
pub struct UploadedItem {
    /// Relative path as submitted by the client (folder-preserving upload).
    pub relative_path: String,
    pub bytes: Bytes,
}

/// A successfully transcoded image, owned by the pipeline until it is
/// written into the archive and summarized in the response.
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    /// Original filename (final path segment of the submitted path).
    pub original_name: String,
    /// Folder component of the submitted path, "" for root-level files.
    pub folder: String,
    /// Output filename, original stem with a `.webp` extension.
    pub output_name: String,
    pub mime_type: String,
    pub data: Bytes,
}

impl ConversionRecord {
    /// Path of this record inside the result archive. No leading separator
    /// when the file was at the root of the uploaded tree.
    pub fn archive_path(&self) -> String {
        if self.folder.is_empty() {
            self.output_name.clone()
        } else {
            format!("{}/{}", self.folder, self.output_name)
        }
    }

    /// Byte-free summary for the response document.
    pub fn summary(&self) -> ConversionSummary {
        ConversionSummary {
            original_name: self.original_name.clone(),
            file_name: self.output_name.clone(),
            folder: self.folder.clone(),
            mime_type: self.mime_type.clone(),
            size: self.data.len(),
        }
    }
}

/// Per-conversion summary exposed to the caller (raw bytes replaced by size).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversionSummary {
    pub original_name: String,
    pub file_name: String,
    pub folder: String,
    pub mime_type: String,
    pub size: usize,
}

/// Terminal response document for a batch upload.
///
/// Partial success is still a 200: callers must inspect both
/// `converted_images` and `errors` rather than rely on the status code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Manifest of every relative path received, eligible or not,
    /// in submission order.
    pub files: Vec<String>,
    pub count: usize,
    /// All successful conversions, ordered by (folder, output filename).
    pub converted_images: Vec<ConversionSummary>,
    pub converted_count: usize,
    /// The same summaries partitioned by folder ("" denotes root),
    /// preserving the intra-folder filename order.
    pub grouped_results: BTreeMap<String, Vec<ConversionSummary>>,
    /// One human-readable message per failed conversion attempt.
    pub errors: Vec<String>,
    /// Base64-encoded ZIP of every converted image under its original
    /// relative path. Omitted when there are no successful conversions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_data: Option<String>,
}

/// Static description served by the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(folder: &str, output_name: &str) -> ConversionRecord {
        ConversionRecord {
            original_name: "photo.jpg".to_string(),
            folder: folder.to_string(),
            output_name: output_name.to_string(),
            mime_type: "image/webp".to_string(),
            data: Bytes::from_static(b"webpdata"),
        }
    }

    #[test]
    fn test_archive_path_root() {
        assert_eq!(record("", "photo.webp").archive_path(), "photo.webp");
    }

    #[test]
    fn test_archive_path_nested() {
        assert_eq!(
            record("trip/day1", "photo.webp").archive_path(),
            "trip/day1/photo.webp"
        );
    }

    #[test]
    fn test_summary_strips_bytes() {
        let summary = record("trip", "photo.webp").summary();
        assert_eq!(summary.original_name, "photo.jpg");
        assert_eq!(summary.file_name, "photo.webp");
        assert_eq!(summary.folder, "trip");
        assert_eq!(summary.mime_type, "image/webp");
        assert_eq!(summary.size, 8);
    }

    #[test]
    fn test_zip_data_omitted_when_absent() {
        let response = UploadResponse {
            message: "ok".to_string(),
            files: vec![],
            count: 0,
            converted_images: vec![],
            converted_count: 0,
            grouped_results: BTreeMap::new(),
            errors: vec![],
            zip_data: None,
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("zip_data").is_none());
    }
}
