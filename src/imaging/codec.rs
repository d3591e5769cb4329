//! Image ingestion, validation, and re-encoding.
//!
//! The decoder records the container format and pixel mode of the input;
//! the encoder reuses that format so the output container always matches
//! the input, whatever was requested.

use std::borrow::Cow;
use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::error::TransformError;

/// Hard ceiling on the raw input size, checked before any decode work.
pub const MAX_PAYLOAD_BYTES: usize = 20_000_000;

/// Container formats the service accepts.
pub const SUPPORTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Gif,
    ImageFormat::Ico,
    ImageFormat::Jpeg,
    ImageFormat::Png,
];

/// Per-pixel channel layout of a decoded image, bit-depth agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
}

impl From<ColorType> for PixelMode {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => PixelMode::Grayscale,
            ColorType::La8 | ColorType::La16 => PixelMode::GrayscaleAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => PixelMode::Rgb,
            _ => PixelMode::Rgba,
        }
    }
}

impl std::fmt::Display for PixelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PixelMode::Grayscale => "grayscale",
            PixelMode::GrayscaleAlpha => "grayscale-alpha",
            PixelMode::Rgb => "rgb",
            PixelMode::Rgba => "rgba",
        })
    }
}

/// A decoded source image with the container format and pixel mode
/// recorded for re-encoding.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
    pub mode: PixelMode,
}

/// Decode raw bytes, enforcing the size ceiling and the supported
/// container set.
pub fn decode(raw: &[u8]) -> Result<DecodedImage, TransformError> {
    if raw.len() > MAX_PAYLOAD_BYTES {
        return Err(TransformError::PayloadTooLarge { size: raw.len() });
    }

    let format = image::guess_format(raw).map_err(|_| TransformError::UnsupportedFormat)?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(TransformError::UnsupportedFormat);
    }

    let image = image::load_from_memory_with_format(raw, format).map_err(|e| {
        tracing::debug!(%e, format = ?format, "Decode failed");
        TransformError::UnsupportedFormat
    })?;
    let mode = PixelMode::from(image.color());

    Ok(DecodedImage {
        image,
        format,
        mode,
    })
}

/// Re-encode with the container format recorded at decode time, using
/// the codec's default settings for that format.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, TransformError> {
    let image = coerce_for_encoder(image, format);
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .map_err(|e| TransformError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Content type string for a supported container format,
/// `image/<lowercase-format-name>`.
pub fn content_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Gif => "image/gif",
        ImageFormat::Ico => "image/ico",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        _ => "application/octet-stream",
    }
}

/// The JPEG, GIF and ICO encoders accept fewer layouts than the decoders
/// produce; convert anything else to the nearest encodable layout.
fn coerce_for_encoder(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match format {
        ImageFormat::Jpeg => match image.color() {
            ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
            ColorType::La8 | ColorType::L16 | ColorType::La16 => {
                Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
            }
            _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        },
        ImageFormat::Gif | ImageFormat::Ico => match image.color() {
            ColorType::Rgb8 | ColorType::Rgba8 => Cow::Borrowed(image),
            _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        },
        _ => Cow::Borrowed(image),
    }
}
