use thiserror::Error;

/// Precondition failures of the overlay core. Degenerate inputs (empty word
/// sequences, empty spans) are valid results, never errors; transient engine
/// failures surface through `Recognition` and are not retried here.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The rescaler needs a display viewport and none is attached.
    #[error("display viewport is not attached")]
    SurfaceUnavailable,

    /// A span query arrived before any recognized document was committed.
    #[error("no recognized document is available")]
    DocumentUnavailable,

    /// The external OCR engine failed; shown to the user as a failed
    /// recognition, never retried by the core.
    #[error("recognition failed")]
    Recognition(#[source] Box<dyn std::error::Error + Send + Sync>),
}
