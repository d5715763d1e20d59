//! Image analysis handler.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{info, warn};

use shelfsense_models::{classify, AnalyzeImageResponse};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Analyze an uploaded shelf image.
///
/// Reads the `file` part of the multipart upload, forwards the image to the
/// detection API, classifies the returned predictions and responds with the
/// summary the frontend renders. Upstream failures surface as 500 with a
/// `detail` message.
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<AnalyzeImageResponse>> {
    let mut image: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;
            image = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let (filename, image_bytes) = image
        .ok_or_else(|| ApiError::bad_request("Missing 'file' field in multipart upload"))?;

    if image_bytes.is_empty() {
        return Err(ApiError::bad_request("Uploaded file is empty"));
    }

    info!(
        filename = filename.as_deref().unwrap_or("<unnamed>"),
        bytes = image_bytes.len(),
        "Processing image"
    );

    let predictions = state.roboflow.detect(&image_bytes).await.map_err(|e| {
        warn!("Detection request failed: {e}");
        e
    })?;

    let report = classify(predictions);
    metrics::record_analysis(report.product_count, report.missing_count);

    info!(
        products = report.product_count,
        missing = report.missing_count,
        severity = report.severity().as_str(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeImageResponse::from(report)))
}
