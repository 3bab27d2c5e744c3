//! Output type definitions.

/// A detected birdsong interval in milliseconds.
///
/// The interval is inclusive at both ends. The end lands one millisecond
/// before the next window boundary, so adjacent annotations never share a
/// boundary millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    /// Start of the interval in milliseconds.
    pub start_ms: u64,
    /// Inclusive end of the interval in milliseconds.
    pub end_ms: u64,
}

impl Annotation {
    /// Create an annotation. `start_ms` must not exceed `end_ms`.
    pub fn new(start_ms: u64, end_ms: u64) -> Self {
        debug_assert!(start_ms <= end_ms);
        Self { start_ms, end_ms }
    }
}
