pub mod core;
pub mod ocr;
pub mod overlay;
pub mod pipeline;

pub use crate::core::error::OverlayError;
pub use crate::core::geometry::BBox;
pub use crate::core::model::{ImageMetadata, OcrDocument, SentenceSpan, WordBlock};
pub use crate::overlay::rescale::Viewport;
pub use crate::overlay::SpanConfig;
pub use crate::pipeline::{CommitOutcome, OverlayPipeline, RecognitionTicket};
