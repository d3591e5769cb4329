pub mod image;

pub use image::{handle_image, ImageQuery, __path_handle_image};
