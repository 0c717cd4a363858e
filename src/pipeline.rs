use image::DynamicImage;
use tracing::debug;

use crate::core::error::OverlayError;
use crate::core::model::{ImageMetadata, OcrDocument, SentenceSpan};
use crate::ocr::flatten::flatten_recognized_page;
use crate::ocr::preprocess::{downscale_for_recognition, recognition_metadata};
use crate::ocr::progress::ProgressSink;
use crate::ocr::{OcrEngine, RecognizedPage};
use crate::overlay::normalize::normalize_line_bands;
use crate::overlay::polygon::outline_path;
use crate::overlay::rescale::{rescale_document, Viewport};
use crate::overlay::span::sentence_span;
use crate::overlay::SpanConfig;

/// Identifies one recognition run. A ticket from a superseded target is
/// rejected at commit time, which is the whole cancellation mechanism:
/// advisory, no hard abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionTicket {
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The result arrived after a newer target was selected; discarded.
    Stale,
}

/// Composes the overlay stages over one displayed page: recognition through
/// the engine seam, flatten, band normalization, rescale into display space,
/// then on-demand span and outline queries against the held document.
pub struct OverlayPipeline<E> {
    engine: E,
    span_config: SpanConfig,
    viewport: Option<Viewport>,
    document: Option<OcrDocument>,
    epoch: u64,
}

impl<E: OcrEngine> OverlayPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            span_config: SpanConfig::default(),
            viewport: None,
            document: None,
            epoch: 0,
        }
    }

    pub fn with_span_config(mut self, span_config: SpanConfig) -> Self {
        self.span_config = span_config;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// The held document, in display space, if a recognition run committed.
    pub fn document(&self) -> Option<&OcrDocument> {
        self.document.as_ref()
    }

    /// Marks a new recognition target. The previously held document is
    /// discarded wholesale and any outstanding ticket becomes stale.
    pub fn select_target(&mut self) -> RecognitionTicket {
        self.epoch += 1;
        self.document = None;
        RecognitionTicket { epoch: self.epoch }
    }

    /// Applies a finished recognition result unless its target has been
    /// superseded. A stale result is a valid outcome, not an error.
    pub fn commit(
        &mut self,
        ticket: RecognitionTicket,
        image_metadata: ImageMetadata,
        page: &RecognizedPage,
    ) -> Result<CommitOutcome, OverlayError> {
        if ticket.epoch != self.epoch {
            debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                "discarding stale recognition result"
            );
            return Ok(CommitOutcome::Stale);
        }

        let viewport = self.viewport.ok_or(OverlayError::SurfaceUnavailable)?;

        let flattened = flatten_recognized_page(image_metadata, page);
        let normalized = OcrDocument {
            image_metadata: flattened.image_metadata,
            text: flattened.text,
            word_blocks: normalize_line_bands(flattened.word_blocks),
        };
        let document = rescale_document(&normalized, &viewport);

        debug!(words = document.word_blocks.len(), "committed recognition result");
        self.document = Some(document);
        Ok(CommitOutcome::Applied)
    }

    /// Synchronous convenience around select/recognize/commit: downscales the
    /// raster, emits the clamping progress calls and holds the result.
    pub fn recognize(
        &mut self,
        raster: &DynamicImage,
        progress: &dyn ProgressSink,
    ) -> Result<&OcrDocument, OverlayError> {
        let ticket = self.select_target();

        let scaled = downscale_for_recognition(raster);
        let image_metadata = recognition_metadata(&scaled);

        progress.on_progress(0);
        let page = self
            .engine
            .recognize(&scaled, progress)
            .map_err(|err| OverlayError::Recognition(err.into()))?;
        progress.on_progress(100);

        self.commit(ticket, image_metadata, &page)?;
        self.document.as_ref().ok_or(OverlayError::DocumentUnavailable)
    }

    /// Sentence-like span around the pivot block. Safe to call repeatedly
    /// against the same held document.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` is out of range for the held document.
    pub fn sentence_span(&self, pivot: usize) -> Result<SentenceSpan, OverlayError> {
        let document = self
            .document
            .as_ref()
            .ok_or(OverlayError::DocumentUnavailable)?;
        Ok(sentence_span(document, pivot, &self.span_config))
    }

    /// Display-space outline path for the span around the pivot block.
    pub fn span_outline_path(&self, pivot: usize) -> Result<String, OverlayError> {
        Ok(outline_path(&self.sentence_span(pivot)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use crate::core::geometry::BBox;
    use crate::ocr::{RecognizedBlock, RecognizedLine, RecognizedParagraph, RecognizedWord};

    struct StubEngine {
        page: RecognizedPage,
    }

    impl OcrEngine for StubEngine {
        fn recognize(
            &self,
            _raster: &DynamicImage,
            _progress: &dyn ProgressSink,
        ) -> Result<RecognizedPage> {
            Ok(self.page.clone())
        }
    }

    fn sample_page() -> RecognizedPage {
        RecognizedPage {
            text: "Hello world.".to_string(),
            blocks: vec![RecognizedBlock {
                paragraphs: vec![RecognizedParagraph {
                    lines: vec![RecognizedLine {
                        words: vec![
                            RecognizedWord {
                                text: "Hello".to_string(),
                                bbox: BBox::new(0.0, 10.0, 5.0, 20.0),
                            },
                            RecognizedWord {
                                text: "world.".to_string(),
                                bbox: BBox::new(6.0, 11.0, 10.0, 19.0),
                            },
                        ],
                    }],
                }],
            }],
        }
    }

    fn metadata() -> ImageMetadata {
        ImageMetadata {
            width: 100.0,
            height: 140.0,
        }
    }

    #[test]
    fn commit_requires_a_viewport() {
        let mut pipeline = OverlayPipeline::new(StubEngine {
            page: sample_page(),
        });
        let ticket = pipeline.select_target();
        let result = pipeline.commit(ticket, metadata(), &sample_page());
        assert!(matches!(result, Err(OverlayError::SurfaceUnavailable)));
    }

    #[test]
    fn superseded_ticket_is_discarded_silently() {
        let mut pipeline = OverlayPipeline::new(StubEngine {
            page: sample_page(),
        });
        pipeline.set_viewport(Viewport::new(100.0));

        let stale_ticket = pipeline.select_target();
        let current_ticket = pipeline.select_target();

        let outcome = pipeline
            .commit(stale_ticket, metadata(), &sample_page())
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Stale);
        assert!(pipeline.document().is_none());

        let outcome = pipeline
            .commit(current_ticket, metadata(), &sample_page())
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Applied);
        assert!(pipeline.document().is_some());
    }

    #[test]
    fn selecting_a_new_target_drops_the_held_document() {
        let mut pipeline = OverlayPipeline::new(StubEngine {
            page: sample_page(),
        });
        pipeline.set_viewport(Viewport::new(100.0));

        let ticket = pipeline.select_target();
        pipeline.commit(ticket, metadata(), &sample_page()).unwrap();
        assert!(pipeline.document().is_some());

        pipeline.select_target();
        assert!(pipeline.document().is_none());
    }

    #[test]
    fn span_query_before_commit_is_a_precondition_failure() {
        let pipeline = OverlayPipeline::new(StubEngine {
            page: sample_page(),
        });
        assert!(matches!(
            pipeline.sentence_span(0),
            Err(OverlayError::DocumentUnavailable)
        ));
    }

    #[test]
    fn committed_document_answers_span_queries() {
        let mut pipeline = OverlayPipeline::new(StubEngine {
            page: sample_page(),
        });
        pipeline.set_viewport(Viewport::new(100.0));
        let ticket = pipeline.select_target();
        pipeline.commit(ticket, metadata(), &sample_page()).unwrap();

        let span = pipeline.sentence_span(0).unwrap();
        assert_eq!(span.blocks.len(), 2);
        assert_eq!(span.text(), "Hello world.");

        let path = pipeline.span_outline_path(0).unwrap();
        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
    }
}
