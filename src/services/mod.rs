pub mod pipeline;
pub mod source;

pub use pipeline::TransformPipeline;
pub use source::{FetchError, SourceFetcher};
