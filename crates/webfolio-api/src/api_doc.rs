//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use webfolio_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Webfolio API",
        version = "0.1.0",
        description = "Folder upload API with image processing. Uploaded folder trees are \
                       classified, raster images are transcoded to WebP, and the results are \
                       returned grouped by folder together with a ZIP archive that preserves \
                       the original structure. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::upload::upload_folder,
        handlers::upload::upload_info,
    ),
    components(
        schemas(
            models::UploadResponse,
            models::ConversionSummary,
            models::ServiceInfo,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "uploads", description = "Folder upload and image conversion operations")
    )
)]
pub struct ApiDoc;
