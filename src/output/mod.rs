//! Annotation encoding and output.

mod encoder;
pub mod progress;
mod types;
mod writer;

pub use encoder::encode_intervals;
pub use types::Annotation;
pub use writer::AnnotationWriter;
