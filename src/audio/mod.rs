//! Audio loading pipeline: decode, resample, segment.

mod decode;
mod resample;
mod segment;

pub use decode::{DecodedAudio, decode_audio_file};
pub use resample::resample;
pub use segment::segment_windows;
