//! Repix - stateless HTTP image transformation service.
//!
//! Takes a raster image (inline request body or remote `source` URL),
//! applies resize/crop/grayscale transforms, and returns it re-encoded
//! in the original container format.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod imaging;
pub mod models;
pub mod server;
pub mod services;
