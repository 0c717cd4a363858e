use crate::core::model::{OcrDocument, SentenceSpan, WordBlock};
use crate::overlay::SpanConfig;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', ';'];

/// A block terminates a sentence when its trimmed text ends in terminator
/// punctuation; punctuation-only tokens qualify through the same rule.
pub fn is_sentence_terminator(block: &WordBlock) -> bool {
    block
        .text
        .trim()
        .chars()
        .last()
        .is_some_and(|last| SENTENCE_TERMINATORS.contains(&last))
}

fn too_far_apart(accepted: &WordBlock, candidate: &WordBlock, config: &SpanConfig) -> bool {
    let y_difference = (accepted.bbox.y0 - candidate.bbox.y0).abs();
    y_difference > accepted.bbox.height() * config.line_height_ratio
}

fn height_mismatch(accepted: &WordBlock, candidate: &WordBlock, config: &SpanConfig) -> bool {
    (accepted.bbox.height() - candidate.bbox.height()).abs() > config.height_tolerance
}

/// Infers the contiguous sentence-like span around the pivot block using only
/// geometry and punctuation.
///
/// Both walks compare each candidate against the most recently accepted block
/// and stop on the too-far, height-mismatch or terminator rule. The backward
/// walk excludes a terminating candidate (it closes the previous sentence).
/// The forward walk, skipped entirely when the pivot itself terminates,
/// appends a terminating candidate before stopping, so a sentence keeps its
/// closing punctuation token. The asymmetry is intentional.
///
/// The result is contiguous in `index_in_parent`, non-empty and contains the
/// pivot exactly once.
///
/// # Panics
///
/// Panics if `pivot` is out of range for the document's word sequence; an
/// invalid pivot is a caller error, not a recoverable state.
pub fn sentence_span(document: &OcrDocument, pivot: usize, config: &SpanConfig) -> SentenceSpan {
    let word_blocks = &document.word_blocks;
    let pivot_block = &word_blocks[pivot];

    let mut leading: Vec<WordBlock> = Vec::new();
    let mut accepted = pivot_block;
    for candidate in word_blocks[..pivot].iter().rev() {
        if too_far_apart(accepted, candidate, config)
            || height_mismatch(accepted, candidate, config)
            || is_sentence_terminator(candidate)
        {
            break;
        }
        accepted = candidate;
        leading.push(candidate.clone());
    }
    leading.reverse();

    let mut blocks = leading;
    blocks.push(pivot_block.clone());

    if !is_sentence_terminator(pivot_block) {
        accepted = pivot_block;
        for candidate in word_blocks[pivot + 1..].iter() {
            let geometry_break = too_far_apart(accepted, candidate, config)
                || height_mismatch(accepted, candidate, config);
            let terminator = is_sentence_terminator(candidate);
            if geometry_break || terminator {
                if terminator {
                    blocks.push(candidate.clone());
                }
                break;
            }
            accepted = candidate;
            blocks.push(candidate.clone());
        }
    }

    SentenceSpan { blocks }
}
