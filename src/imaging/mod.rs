pub mod codec;
pub mod geometry;

pub use codec::{DecodedImage, PixelMode, MAX_PAYLOAD_BYTES};
