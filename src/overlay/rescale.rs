use serde::{Deserialize, Serialize};

use crate::core::model::{ImageMetadata, OcrDocument};

/// Measurement surface supplied by the presentation layer: the display width
/// the page is drawn at and the device pixel density.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }
}

/// Maps a document from source-image space to display space with a single
/// uniform scalar; aspect ratio is assumed correct from the source capture.
/// Pure: the input document is never mutated.
pub fn rescale_document(document: &OcrDocument, viewport: &Viewport) -> OcrDocument {
    let scale = viewport.width / document.image_metadata.width * viewport.pixel_ratio;

    OcrDocument {
        image_metadata: ImageMetadata {
            width: document.image_metadata.width * scale,
            height: document.image_metadata.height * scale,
        },
        text: document.text.clone(),
        word_blocks: document
            .word_blocks
            .iter()
            .map(|block| {
                let mut block = block.clone();
                block.bbox = block.bbox.scaled(scale);
                block
            })
            .collect(),
    }
}
