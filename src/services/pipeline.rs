//! The transform pipeline: decode, geometry, grayscale, encode.

use image::{DynamicImage, GenericImageView};

use crate::error::TransformError;
use crate::imaging::codec::{self, DecodedImage};
use crate::imaging::geometry;
use crate::models::{ResizeMethod, TransformParams};

/// Single-pass pipeline from raw bytes to re-encoded bytes.
///
/// Holds no per-request state; one instance is shared by all requests.
#[derive(Debug, Default, Clone)]
pub struct TransformPipeline;

impl TransformPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline. Returns the re-encoded bytes and the
    /// content type derived from the input container format.
    pub fn run(
        &self,
        raw: &[u8],
        params: &TransformParams,
    ) -> Result<(Vec<u8>, &'static str), TransformError> {
        let DecodedImage {
            image,
            format,
            mode,
        } = codec::decode(raw)?;

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            format = ?format,
            mode = %mode,
            "Decoded source image"
        );

        let image = apply_geometry(image, params);
        // Grayscale always runs after the geometric transform.
        let image = if params.greyscale {
            image.grayscale()
        } else {
            image
        };

        let bytes = codec::encode(&image, format)?;

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            out_bytes = bytes.len(),
            "Transformed image encoded"
        );

        Ok((bytes, codec::content_type(format)))
    }
}

/// Apply the requested resize strategy. A request without target
/// dimensions leaves the image untouched; an absent width or height is
/// filled from the source image.
fn apply_geometry(image: DynamicImage, params: &TransformParams) -> DynamicImage {
    if !params.wants_geometry() {
        return image;
    }

    let (w, h) = params.resolve_targets((image.width(), image.height()));
    match params.resize_method {
        ResizeMethod::Scale => geometry::shrink_to_fit(&image, w, h),
        ResizeMethod::Crop => geometry::crop_from_origin(&image, w, h),
        ResizeMethod::ScaleAndCrop => geometry::scale_and_crop(&image, w, h),
    }
}
