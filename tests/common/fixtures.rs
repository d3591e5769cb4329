//! Image fixtures built in-memory with the `image` crate.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .expect("Failed to encode fixture image");
    buf.into_inner()
}

/// Solid-color RGB image encoded as PNG.
pub fn png_rgb(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 60, 60]))),
        ImageFormat::Png,
    )
}

/// Solid-color RGBA image encoded as PNG.
pub fn png_rgba(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([60, 120, 200, 255]),
        )),
        ImageFormat::Png,
    )
}

/// Solid-color RGB image encoded as JPEG.
pub fn jpeg_rgb(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 150, 40]))),
        ImageFormat::Jpeg,
    )
}

/// Solid-color RGBA image encoded as GIF.
pub fn gif_rgba(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([20, 20, 160, 255]),
        )),
        ImageFormat::Gif,
    )
}

/// Minimal valid 2x2 24-bit BMP: a real image in a container the
/// service does not support.
pub fn bmp() -> Vec<u8> {
    let mut b = Vec::new();
    // BITMAPFILEHEADER
    b.extend_from_slice(b"BM");
    b.extend_from_slice(&70u32.to_le_bytes()); // file size
    b.extend_from_slice(&[0; 4]); // reserved
    b.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
    // BITMAPINFOHEADER
    b.extend_from_slice(&40u32.to_le_bytes()); // header size
    b.extend_from_slice(&2i32.to_le_bytes()); // width
    b.extend_from_slice(&2i32.to_le_bytes()); // height
    b.extend_from_slice(&1u16.to_le_bytes()); // planes
    b.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    b.extend_from_slice(&[0; 24]); // no compression, defaults
    // two rows of two BGR pixels, each row padded to 4 bytes
    for _ in 0..2 {
        b.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0]);
    }
    b
}

/// Decode response bytes for assertions.
pub fn decode(bytes: &[u8]) -> (DynamicImage, ImageFormat) {
    let format = image::guess_format(bytes).expect("Response has no recognizable image format");
    let image = image::load_from_memory(bytes).expect("Response body is not a decodable image");
    (image, format)
}
