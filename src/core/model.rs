use serde::{Deserialize, Serialize};

use crate::core::geometry::BBox;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ImageMetadata {
    pub width: f32,
    pub height: f32,
}

/// One recognized word with its bounding box and the engine's structural tags.
///
/// `paragraph_number` and `line_number` restart across structural blocks, so
/// equal values do not imply adjacency; `index_in_parent` is the stable
/// identity and the unit of adjacency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordBlock {
    pub index_in_parent: usize,
    pub bbox: BBox,
    pub text: String,
    pub paragraph_number: usize,
    pub line_number: usize,
}

impl WordBlock {
    pub fn line_key(&self) -> (usize, usize) {
        (self.paragraph_number, self.line_number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrDocument {
    pub image_metadata: ImageMetadata,
    pub text: String,
    pub word_blocks: Vec<WordBlock>,
}

/// A contiguous run of word blocks treated as one highlightable unit.
/// Ephemeral: recomputed per hover query, never persisted.
#[derive(Debug, Clone)]
pub struct SentenceSpan {
    pub blocks: Vec<WordBlock>,
}

impl SentenceSpan {
    pub fn first_index(&self) -> Option<usize> {
        self.blocks.first().map(|block| block.index_in_parent)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.blocks.last().map(|block| block.index_in_parent)
    }

    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
