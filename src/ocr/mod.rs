pub mod bridge;
pub mod flatten;
pub mod preprocess;
pub mod progress;

use anyhow::Result;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::core::geometry::BBox;
use crate::ocr::progress::ProgressSink;

/// Nested recognition result as the external engine reports it:
/// ordered blocks, each with ordered paragraphs, lines and words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizedPage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub blocks: Vec<RecognizedBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizedBlock {
    #[serde(default)]
    pub paragraphs: Vec<RecognizedParagraph>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizedParagraph {
    #[serde(default)]
    pub lines: Vec<RecognizedLine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizedLine {
    #[serde(default)]
    pub words: Vec<RecognizedWord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedWord {
    pub text: String,
    pub bbox: BBox,
}

/// Seam to the external OCR engine. Implementations may report coarse
/// progress through the sink or report nothing at all; the pipeline emits
/// the clamping 0 and 100 around the call either way.
pub trait OcrEngine {
    fn recognize(&self, raster: &DynamicImage, progress: &dyn ProgressSink)
        -> Result<RecognizedPage>;
}
