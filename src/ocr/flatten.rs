use crate::core::model::{ImageMetadata, OcrDocument, WordBlock};
use crate::ocr::RecognizedPage;

/// Flattens the engine's nested result into an index-stable word sequence.
///
/// `index_in_parent` is assigned by output position. `paragraph_number` is
/// the paragraph's index within its block and `line_number` the line's index
/// within its paragraph, so both restart across blocks. A result with no
/// blocks yields an empty document.
pub fn flatten_recognized_page(image_metadata: ImageMetadata, page: &RecognizedPage) -> OcrDocument {
    let mut word_blocks: Vec<WordBlock> = Vec::new();

    for block in &page.blocks {
        for (paragraph_number, paragraph) in block.paragraphs.iter().enumerate() {
            for (line_number, line) in paragraph.lines.iter().enumerate() {
                for word in &line.words {
                    word_blocks.push(WordBlock {
                        index_in_parent: word_blocks.len(),
                        bbox: word.bbox,
                        text: word.text.clone(),
                        paragraph_number,
                        line_number,
                    });
                }
            }
        }
    }

    OcrDocument {
        image_metadata,
        text: page.text.clone(),
        word_blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::BBox;
    use crate::ocr::{RecognizedBlock, RecognizedLine, RecognizedParagraph, RecognizedWord};

    fn metadata() -> ImageMetadata {
        ImageMetadata {
            width: 100.0,
            height: 140.0,
        }
    }

    fn word(text: &str) -> RecognizedWord {
        RecognizedWord {
            text: text.to_string(),
            bbox: BBox::new(0.0, 0.0, 5.0, 10.0),
        }
    }

    fn line(words: Vec<RecognizedWord>) -> RecognizedLine {
        RecognizedLine { words }
    }

    #[test]
    fn assigns_contiguous_indices() {
        let page = RecognizedPage {
            text: "a b c".to_string(),
            blocks: vec![RecognizedBlock {
                paragraphs: vec![RecognizedParagraph {
                    lines: vec![line(vec![word("a"), word("b")]), line(vec![word("c")])],
                }],
            }],
        };

        let document = flatten_recognized_page(metadata(), &page);
        assert_eq!(document.word_blocks.len(), 3);
        for (i, block) in document.word_blocks.iter().enumerate() {
            assert_eq!(block.index_in_parent, i);
        }
        assert_eq!(document.text, "a b c");
    }

    #[test]
    fn numbers_restart_across_blocks() {
        let one_word_block = RecognizedBlock {
            paragraphs: vec![RecognizedParagraph {
                lines: vec![line(vec![word("x")])],
            }],
        };
        let page = RecognizedPage {
            text: String::new(),
            blocks: vec![one_word_block.clone(), one_word_block],
        };

        let document = flatten_recognized_page(metadata(), &page);
        assert_eq!(document.word_blocks.len(), 2);
        // Both words carry (paragraph 0, line 0) even though they belong to
        // different blocks; only index_in_parent distinguishes them.
        assert_eq!(document.word_blocks[0].line_key(), (0, 0));
        assert_eq!(document.word_blocks[1].line_key(), (0, 0));
        assert_eq!(document.word_blocks[1].index_in_parent, 1);
    }

    #[test]
    fn empty_result_yields_empty_document() {
        let page = RecognizedPage::default();
        let document = flatten_recognized_page(metadata(), &page);
        assert!(document.word_blocks.is_empty());
    }
}
