use serde::Deserialize;

/// Resize strategy requested by the client.
///
/// Only meaningful when at least one target dimension is present in the
/// request; without dimensions no geometric transform runs at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMethod {
    /// Shrink-only, aspect-ratio-preserving fit within the target bound.
    #[default]
    Scale,
    /// Cut the target rectangle from the top-left origin, no scaling.
    Crop,
    /// Shrink, then cut the centered target rectangle.
    ScaleAndCrop,
}

impl ResizeMethod {
    /// Parse the query/CLI spelling of a resize method.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scale" => Some(Self::Scale),
            "crop" => Some(Self::Crop),
            "scale_and_crop" => Some(Self::ScaleAndCrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Crop => "crop",
            Self::ScaleAndCrop => "scale_and_crop",
        }
    }
}

/// Output container format requested via the `format` query parameter.
///
/// Accepted for interface compatibility; the output always keeps the
/// input container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedFormat {
    Gif,
    Ico,
    Jpeg,
    Png,
}

/// Pixel mode requested via the `mode` query parameter.
///
/// Accepted for interface compatibility; the output always keeps the
/// input pixel mode (grayscale conversion aside).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedMode {
    Rgb,
    Rgba,
}

/// Validated transform parameters for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformParams {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resize_method: ResizeMethod,
    pub greyscale: bool,
}

impl TransformParams {
    /// Whether any geometric transform was requested.
    pub fn wants_geometry(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Fill absent target dimensions from the current image size.
    pub fn resolve_targets(&self, current: (u32, u32)) -> (u32, u32) {
        (
            self.width.unwrap_or(current.0),
            self.height.unwrap_or(current.1),
        )
    }
}
