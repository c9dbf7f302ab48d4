//! Folder upload handler: ingestion, classification, transcoding,
//! aggregation, and archiving for one batch.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use webfolio_core::models::{ConversionRecord, ServiceInfo, UploadResponse, UploadedItem};
use webfolio_core::AppError;
use webfolio_processing::{
    build_zip_archive, group_by_folder, order_records, split_relative_path, webp_output_name,
    ConversionLedger, TranscodeError,
};

/// Multipart field name carrying uploaded files. Each part's filename is the
/// file's relative path within the uploaded folder tree.
const UPLOAD_FIELD: &str = "files";

/// One classified, transcoding-eligible item waiting for conversion.
struct TranscodeJob {
    folder: String,
    file_name: String,
    /// Manifest path, used to identify the item in failure messages.
    display_path: String,
    bytes: Bytes,
}

/// Upload a folder of files and transcode every raster image to WebP.
///
/// Ineligible files are counted in the manifest and otherwise ignored. A
/// failed conversion is recorded in `errors` and never aborts the batch:
/// partial success still returns 200, so callers must inspect both the
/// success and failure collections.
#[utoipa::path(
    post,
    path = "/api/v0/uploads",
    tag = "uploads",
    responses(
        (status = 200, description = "Batch processed (including partial success)", body = UploadResponse),
        (status = 400, description = "No files submitted or malformed multipart body", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_folder"))]
pub async fn upload_folder(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let items = collect_uploaded_items(multipart).await?;
    if items.is_empty() {
        return Err(AppError::InvalidInput("No files provided".to_string()).into());
    }

    // Classify in submission order; the manifest keeps every path received.
    let mut manifest = Vec::with_capacity(items.len());
    let mut jobs = Vec::new();
    for item in items {
        let (folder, file_name) = split_relative_path(&item.relative_path);
        let display_path = if folder.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", folder, file_name)
        };
        manifest.push(display_path.clone());

        if state.classifier.is_image(&file_name) {
            jobs.push(TranscodeJob {
                folder,
                file_name,
                display_path,
                bytes: item.bytes,
            });
        }
    }

    let job_count = jobs.len();
    tracing::info!(
        received = manifest.len(),
        eligible = job_count,
        "Processing upload batch"
    );

    // Transcode concurrently on the blocking pool; the codec work is
    // CPU-bound. Outcomes land in the ledger in completion order, which is
    // fine: the grouper re-imposes the canonical order below.
    let transcoder = state.transcoder;
    let handles: Vec<_> = jobs
        .into_iter()
        .map(|job| {
            tokio::task::spawn_blocking(move || {
                let result = transcoder.transcode(&job.bytes);
                (job, result)
            })
        })
        .collect();

    let mut ledger = ConversionLedger::new();
    for handle in futures::future::join_all(handles).await {
        let (job, result) = handle
            .map_err(|e| AppError::Internal(format!("Transcode task panicked: {}", e)))?;
        match result {
            Ok(data) => {
                let output_name = webp_output_name(&job.file_name);
                tracing::debug!(from = %job.display_path, to = %output_name, "Converted image");
                ledger.append_record(ConversionRecord {
                    original_name: job.file_name,
                    folder: job.folder,
                    output_name,
                    mime_type: "image/webp".to_string(),
                    data,
                });
            }
            Err(err) => {
                tracing::warn!(file = %job.display_path, error = %err, "Conversion failed");
                ledger.append_failure(describe_failure(&job.display_path, &err));
            }
        }
    }

    let (records, errors) = ledger.into_parts();
    let ordered = order_records(records);
    let grouped_results = group_by_folder(&ordered);

    // The archive is a single shared artifact: unlike per-item faults, a
    // failure here fails the whole request.
    let zip_data = if ordered.is_empty() {
        None
    } else {
        let blob =
            build_zip_archive(&ordered).map_err(|e| AppError::Archive(e.to_string()))?;
        Some(BASE64.encode(blob))
    };

    let converted_images: Vec<_> = ordered.iter().map(|r| r.summary()).collect();
    let response = UploadResponse {
        message: "Upload processed successfully".to_string(),
        count: manifest.len(),
        files: manifest,
        converted_count: converted_images.len(),
        converted_images,
        grouped_results,
        errors,
        zip_data,
    };

    tracing::info!(
        converted = response.converted_count,
        failed = response.errors.len(),
        "Upload batch complete"
    );

    Ok(Json(response))
}

/// Describe the upload endpoint.
#[utoipa::path(
    get,
    path = "/api/v0/uploads",
    tag = "uploads",
    responses(
        (status = 200, description = "Service description", body = ServiceInfo)
    )
)]
pub async fn upload_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Folder upload API with image processing - raster images are converted to WebP \
                  and returned as a ZIP archive preserving the folder structure"
            .to_string(),
    })
}

/// Drain the multipart body into uploaded items. Parts not named `files` or
/// lacking a filename are skipped; a transport-level read error is a client
/// error for the whole request.
async fn collect_uploaded_items(
    mut multipart: Multipart,
) -> Result<Vec<UploadedItem>, HttpAppError> {
    let mut items = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        let message = format!("Failed to read multipart body: {}", e.body_text());
        HttpAppError::from(read_error(e.status(), message))
    })? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if field_name != UPLOAD_FIELD {
            tracing::debug!(field = %field_name, "Skipping unrelated multipart field");
            continue;
        }

        let Some(relative_path) = field.file_name().map(|s| s.to_string()) else {
            tracing::debug!("Skipping file part without a filename");
            continue;
        };

        let bytes = field.bytes().await.map_err(|e| {
            let message = format!(
                "Failed to read file data for '{}': {}",
                relative_path,
                e.body_text()
            );
            HttpAppError::from(read_error(e.status(), message))
        })?;

        items.push(UploadedItem {
            relative_path,
            bytes,
        });
    }

    Ok(items)
}

fn describe_failure(display_path: &str, err: &TranscodeError) -> String {
    format!("Failed to convert {}: {}", display_path, err)
}

/// A body-read failure is 413 when the configured size limit tripped,
/// otherwise a malformed request.
fn read_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::InvalidInput(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webfolio_core::ErrorMetadata;

    #[test]
    fn test_describe_failure_names_the_item() {
        let err = TranscodeError::Decode("bad magic bytes".to_string());
        let message = describe_failure("trip/broken.jpg", &err);
        assert!(message.contains("trip/broken.jpg"));
        assert!(message.contains("failed to decode image"));
    }

    #[test]
    fn test_read_error_maps_length_limit_to_payload_too_large() {
        let err = read_error(StatusCode::PAYLOAD_TOO_LARGE, "body too large".to_string());
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(err.http_status_code(), 413);
    }

    #[test]
    fn test_read_error_maps_malformed_body_to_invalid_input() {
        let err = read_error(StatusCode::BAD_REQUEST, "missing boundary".to_string());
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.http_status_code(), 400);
    }
}
