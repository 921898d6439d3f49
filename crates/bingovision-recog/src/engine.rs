//! Recognition engine boundary
//!
//! The text recognizer is an external collaborator. Anything that takes a
//! monochrome glyph on a padded white background and returns text plus a
//! confidence score can sit behind [`RecognitionEngine`]; the expected
//! engine configuration is a digit-only character whitelist with
//! single-line page segmentation, but that is the engine's business.
//!
//! Engine calls are the only latency-bearing operation in the pipeline;
//! everything else is pure CPU work.

use crate::error::RecogResult;
use bingovision_core::Gray;

/// Raw result of one recognition attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    /// Recognized text, as returned by the engine.
    pub text: String,
    /// Engine confidence in [0, 100].
    pub confidence: f32,
}

impl EngineOutput {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self { text: text.into(), confidence }
    }
}

/// An opaque text recognition engine.
///
/// Implementations must be shareable across worker threads; the parallel
/// recognition mode calls `recognize` from several cells at once.
///
/// # Errors
///
/// An error means the engine itself failed (unavailable, crashed,
/// timed out). Callers treat it as a classification failure for the
/// affected cell only; it never aborts the rest of the card.
pub trait RecognitionEngine: Send + Sync {
    fn recognize(&self, glyph: &Gray) -> RecogResult<EngineOutput>;
}
