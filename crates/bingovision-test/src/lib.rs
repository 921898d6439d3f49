//! bingovision-test - Shared test support
//!
//! Synthetic image builders and a scriptable mock recognition engine,
//! used by the integration tests of the other workspace crates. Test
//! images are generated rather than loaded from disk: the pipeline's
//! properties (dimension formulas, suppression guarantees, acceptance
//! rules) are all checkable on small constructed inputs.

use bingovision_core::{Raster, Rgb};
use bingovision_recog::{EngineOutput, RecogError, RecogResult, RecognitionEngine};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A raster filled with a single color.
pub fn solid_raster(width: u32, height: u32, color: Rgb) -> Raster {
    let mut raster = Raster::new(width, height, 4).expect("test raster geometry");
    for y in 0..height {
        for x in 0..width {
            raster.set_rgb(x, y, color.r, color.g, color.b).expect("in bounds");
        }
    }
    raster
}

/// Paint an axis-aligned rectangle onto a raster, clipped to its bounds.
pub fn paint_rect(raster: &mut Raster, x0: u32, y0: u32, w: u32, h: u32, color: Rgb) {
    for y in y0..(y0 + h).min(raster.height()) {
        for x in x0..(x0 + w).min(raster.width()) {
            raster.set_rgb(x, y, color.r, color.g, color.b).expect("in bounds");
        }
    }
}

/// A cell crop: colored background with a centered dark bar standing in
/// for a digit stroke.
pub fn glyph_cell(width: u32, height: u32, background: Rgb, ink: Rgb) -> Raster {
    let mut cell = solid_raster(width, height, background);
    let bar_w = (width / 5).max(2);
    let bar_h = (height / 2).max(4);
    paint_rect(
        &mut cell,
        (width - bar_w) / 2,
        (height - bar_h) / 2,
        bar_w,
        bar_h,
        ink,
    );
    cell
}

/// One scripted response of the [`MockEngine`].
#[derive(Debug, Clone)]
pub enum MockResponse {
    Ok(EngineOutput),
    Fail(String),
}

impl MockResponse {
    pub fn ok(text: &str, confidence: f32) -> Self {
        MockResponse::Ok(EngineOutput::new(text, confidence))
    }
}

/// A recognition engine replaying scripted responses.
///
/// Responses are consumed in call order, which matches the row-major
/// cell order under the serial run mode. When the script runs dry the
/// engine falls back to its default response. Calls are counted so tests
/// can assert skip behavior.
pub struct MockEngine {
    script: Mutex<VecDeque<MockResponse>>,
    fallback: MockResponse,
    calls: AtomicUsize,
}

impl MockEngine {
    /// An engine answering every call with the same response.
    pub fn constant(response: MockResponse) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: response,
            calls: AtomicUsize::new(0),
        }
    }

    /// An engine replaying `script` in order, then rejecting with empty
    /// text (which the acceptance rule refuses).
    pub fn scripted(script: impl IntoIterator<Item = MockResponse>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            fallback: MockResponse::ok("", 0.0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl RecognitionEngine for MockEngine {
    fn recognize(&self, _glyph: &bingovision_core::Gray) -> RecogResult<EngineOutput> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let next = self
            .script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match next {
            MockResponse::Ok(output) => Ok(output),
            MockResponse::Fail(message) => Err(RecogError::Engine(message)),
        }
    }
}
