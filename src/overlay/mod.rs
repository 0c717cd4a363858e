pub mod normalize;
pub mod polygon;
pub mod rescale;
pub mod span;

use serde::{Deserialize, Serialize};

/// Tuned constants for sentence-span inference. The defaults were calibrated
/// against real recognition output; whether they should track image
/// resolution or font size is an open question, so they stay configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpanConfig {
    /// Two blocks are too far apart when their `y0` values differ by more
    /// than this multiple of the accepted block's height.
    pub line_height_ratio: f32,
    /// Maximum height difference, in coordinate units, before two blocks are
    /// considered to belong to different text.
    pub height_tolerance: f32,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            line_height_ratio: 2.0,
            height_tolerance: 2.0,
        }
    }
}
