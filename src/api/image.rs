use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{RequestedFormat, RequestedMode, ResizeMethod, TransformParams};
use crate::services::{SourceFetcher, TransformPipeline};

/// Query parameters for the /image endpoint.
#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub resize_method: ResizeMethod,
    #[serde(default)]
    pub greyscale: bool,
    /// Absolute URL to fetch the source image from instead of the body.
    #[serde(default)]
    pub source: Option<String>,
    /// Accepted for interface compatibility; not applied to the output.
    #[serde(default)]
    pub format: Option<RequestedFormat>,
    /// Accepted for interface compatibility; not applied to the output.
    #[serde(default)]
    pub mode: Option<RequestedMode>,
}

/// Transform an image
///
/// The source image comes from the `source` URL when given, otherwise
/// from the raw request body. The response carries the transformed image
/// re-encoded in the detected input container format.
#[utoipa::path(
    get,
    path = "/image",
    request_body(content = Vec<u8>, description = "Raw image bytes; used when no `source` URL is given", content_type = "image/*"),
    responses(
        (status = 200, description = "Transformed image in the input container format", content_type = "image/*"),
        (status = 400, description = "Source fetch failed, payload exceeds 20MB, or non-positive dimensions"),
        (status = 415, description = "Input is not a GIF, ICO, JPEG or PNG"),
    ),
    params(
        ("width" = Option<u32>, Query, description = "Target width in pixels, must be > 0"),
        ("height" = Option<u32>, Query, description = "Target height in pixels, must be > 0"),
        ("resize_method" = Option<String>, Query, description = "Resize strategy: 'scale' (default), 'crop', or 'scale_and_crop'; only applied when width or height is given"),
        ("greyscale" = Option<bool>, Query, description = "Convert the result to grayscale (default false)"),
        ("source" = Option<String>, Query, description = "HTTP(S) URL to fetch the source image from; the request body is used when absent"),
        ("format" = Option<String>, Query, description = "gif | ico | jpeg | png; accepted but not applied, output keeps the input format"),
        ("mode" = Option<String>, Query, description = "rgb | rgba; accepted but not applied, output keeps the input mode"),
    ),
    tag = "Transform"
)]
pub async fn handle_image(
    State(fetcher): State<Arc<SourceFetcher>>,
    State(pipeline): State<Arc<TransformPipeline>>,
    Query(query): Query<ImageQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let params = validate(&query)?;

    tracing::info!(
        width = ?params.width,
        height = ?params.height,
        resize_method = params.resize_method.as_str(),
        greyscale = params.greyscale,
        source = ?query.source,
        body_bytes = body.len(),
        "Image transform request received"
    );

    if query.format.is_some() || query.mode.is_some() {
        tracing::debug!(
            format = ?query.format,
            mode = ?query.mode,
            "format/mode parameters accepted but not applied"
        );
    }

    // Blocking fetch and CPU-bound pixel work stay off the async runtime.
    let source = query.source.clone();
    let (bytes, content_type) = tokio::task::spawn_blocking(move || {
        let raw = match source {
            Some(url) => fetcher.fetch(&url)?,
            None => body.to_vec(),
        };
        Ok::<_, ApiError>(pipeline.run(&raw, &params)?)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

    tracing::info!(size_bytes = bytes.len(), content_type = content_type, "Image transformed");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_LENGTH, &bytes.len().to_string()),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

fn validate(query: &ImageQuery) -> Result<TransformParams, ApiError> {
    if query.width == Some(0) {
        return Err(ApiError::InvalidDimension("width"));
    }
    if query.height == Some(0) {
        return Err(ApiError::InvalidDimension("height"));
    }
    Ok(TransformParams {
        width: query.width,
        height: query.height,
        resize_method: query.resize_method,
        greyscale: query.greyscale,
    })
}
