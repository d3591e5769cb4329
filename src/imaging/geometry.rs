//! Geometric resize and crop primitives.
//!
//! All functions here are pure: they take a decoded image and return a
//! new one. Format and color handling stay in the codec layer.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView};

/// Scale an image down to fit within `max_w x max_h`, preserving aspect
/// ratio. An image already inside the bound is returned unchanged; this
/// never enlarges.
pub fn shrink_to_fit(image: &DynamicImage, max_w: u32, max_h: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    if w <= max_w && h <= max_h {
        return image.clone();
    }
    image.resize(max_w, max_h, FilterType::Lanczos3)
}

/// Scale, then center-crop to exactly `target_w x target_h`.
///
/// The image is first bounded to `(w, target_h)` for landscape sources
/// and `(target_w, h)` for portrait ones, shrinking only. The centered
/// target rectangle is then cut out of the scaled image. When the shrink
/// step leaves the image smaller than the target on an axis, the result
/// is the covered region centered on a zero-filled canvas of the target
/// size, so the output dimensions are always exactly the target.
pub fn scale_and_crop(image: &DynamicImage, target_w: u32, target_h: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    let (bound_w, bound_h) = if w >= h { (w, target_h) } else { (target_w, h) };
    let scaled = shrink_to_fit(image, bound_w, bound_h);

    let (w, h) = scaled.dimensions();
    if w >= target_w && h >= target_h {
        return scaled.crop_imm((w - target_w) / 2, (h - target_h) / 2, target_w, target_h);
    }

    let region = scaled.crop_imm(
        w.saturating_sub(target_w) / 2,
        h.saturating_sub(target_h) / 2,
        target_w.min(w),
        target_h.min(h),
    );
    center_on_canvas(&region, target_w, target_h)
}

/// Crop to `target_w x target_h` from the top-left origin, without
/// scaling. A target extending past the source is zero-padded.
pub fn crop_from_origin(image: &DynamicImage, target_w: u32, target_h: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    if w >= target_w && h >= target_h {
        return image.crop_imm(0, 0, target_w, target_h);
    }

    let region = image.crop_imm(0, 0, target_w.min(w), target_h.min(h));
    let mut canvas = DynamicImage::new(target_w, target_h, region.color());
    imageops::replace(&mut canvas, &region, 0, 0);
    canvas
}

fn center_on_canvas(image: &DynamicImage, target_w: u32, target_h: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    let mut canvas = DynamicImage::new(target_w, target_h, image.color());
    imageops::replace(
        &mut canvas,
        image,
        i64::from((target_w - w) / 2),
        i64::from((target_h - h) / 2),
    );
    canvas
}
