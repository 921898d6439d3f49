//! Card recognition session
//!
//! Coordinates extraction, preparation, and classification across the 25
//! cells of one card. Two execution modes:
//!
//! - [`CardSession::run`]: strict row-major serial order with a per-cell
//!   progress callback. The ordering is observable (progress UIs depend
//!   on it) even though cells are independent.
//! - [`CardSession::run_parallel`]: one rayon task per pending cell, for
//!   callers that do not need incremental progress.
//!
//! Both modes take an immutable snapshot of the palette and tolerance at
//! start, so edits made mid-run never tear a card's results. Per-cell
//! faults are isolated: a degenerate sampling rectangle or a failed
//! engine call marks that cell and the run continues. Cancellation is
//! coarse-grained between cells; a cell that has started always finishes,
//! and accepted state is never rolled back.

use crate::card::{CardState, CellStatus};
use crate::classify::{Decision, evaluate};
use crate::engine::RecognitionEngine;
use crate::error::RecogResult;
use bingovision_core::{Palette, Raster};
use bingovision_grid::{
    CellAddress, DEFAULT_INSET, GRID_SIZE, Quad, cell_bounds, extract, validate_inset,
};
use bingovision_prep::{PrepOptions, prepare};
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Cooperative cancellation flag, shared between the caller and a run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Parameters of one recognition run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fractional inset of each cell's sampling rectangle.
    pub inset: f32,
    /// Preparation parameters. The tolerance field is overridden by the
    /// card's own setting when the run snapshot is taken.
    pub prep: PrepOptions,
    /// Source photos whose smaller dimension is below this are upscaled
    /// before sampling; small inputs starve the recognizer.
    pub min_source_dim: u32,
    /// Upscale factor cap.
    pub max_upscale: u32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            inset: DEFAULT_INSET,
            prep: PrepOptions::default(),
            min_source_dim: 800,
            max_upscale: 6,
        }
    }
}

/// What happened to one cell during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// The cell already held a validated value and was not retried.
    Skipped,
    Accepted { value: u32, low_confidence: bool },
    /// The engine produced something, but the acceptance rule refused it.
    Rejected { hint: String },
    /// Sampling rectangle too small to extract.
    Unreadable,
    /// The engine itself failed for this cell.
    EngineError(String),
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Cells holding a validated value after the run (including skips).
    pub detected: usize,
    /// Cells actually sent to the engine.
    pub classified: usize,
    pub failed: usize,
    /// True when the run stopped early on a cancellation signal.
    pub cancelled: bool,
}

/// One card's in-flight recognition state: the durable [`CardState`],
/// the source photo, and per-cell statuses and correction hints.
#[derive(Debug)]
pub struct CardSession {
    state: CardState,
    source: Raster,
    statuses: [[CellStatus; GRID_SIZE]; GRID_SIZE],
    hints: [[Option<String>; GRID_SIZE]; GRID_SIZE],
}

impl CardSession {
    pub fn new(state: CardState, source: Raster) -> Self {
        Self {
            state,
            source,
            statuses: Default::default(),
            hints: Default::default(),
        }
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn status(&self, addr: CellAddress) -> CellStatus {
        self.statuses[addr.row][addr.col]
    }

    /// Raw engine text kept after a rejection, as a correction hint.
    pub fn hint(&self, addr: CellAddress) -> Option<&str> {
        self.hints[addr.row][addr.col].as_deref()
    }

    /// Record a user-entered value; user confirmation always wins over
    /// recognition results.
    pub fn confirm_value(&mut self, addr: CellAddress, value: impl Into<String>) {
        self.state.set_value(addr, value);
        self.statuses[addr.row][addr.col] = CellStatus::UserConfirmed;
        self.hints[addr.row][addr.col] = None;
    }

    /// Flag a cell for retry on the next run.
    pub fn mark_failed(&mut self, addr: CellAddress) {
        self.statuses[addr.row][addr.col] = CellStatus::Failed;
    }

    /// Whether a run would classify this cell.
    ///
    /// The free cell is never classified; a cell holding a validated
    /// value is retried only when explicitly flagged failed.
    pub fn needs_classification(&self, addr: CellAddress) -> bool {
        if self.state.is_free_cell(addr) {
            return false;
        }
        !(self.state.is_validated(addr) && self.status(addr) != CellStatus::Failed)
    }

    /// Run recognition serially in row-major order.
    ///
    /// `progress` is invoked once per non-free cell, in order, after the
    /// cell settles.
    ///
    /// # Errors
    ///
    /// Only configuration preconditions fail (an out-of-range inset);
    /// per-cell faults are recorded on the cell.
    pub fn run<E>(
        &mut self,
        engine: &E,
        opts: &RunOptions,
        cancel: &CancelToken,
        mut progress: impl FnMut(CellAddress, &CellOutcome),
    ) -> RecogResult<RunSummary>
    where
        E: RecognitionEngine + ?Sized,
    {
        let (source, quad, palette, prep) = self.snapshot(opts)?;
        let mut summary = RunSummary::default();

        for addr in CellAddress::all() {
            if self.state.is_free_cell(addr) {
                continue;
            }
            if cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            let outcome = if self.needs_classification(addr) {
                summary.classified += 1;
                classify_cell(&source, &quad, addr, opts.inset, &palette, &prep, engine)
            } else {
                CellOutcome::Skipped
            };
            self.apply(addr, &outcome, &mut summary);
            progress(addr, &outcome);
        }

        summary.detected = self.detected_count();
        info!(
            detected = summary.detected,
            classified = summary.classified,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "recognition run finished"
        );
        Ok(summary)
    }

    /// Run recognition with one rayon task per pending cell.
    ///
    /// No ordering guarantee and no incremental progress; otherwise
    /// identical to [`CardSession::run`]. Each cell is classified by
    /// exactly one task, so per-cell state is written once.
    pub fn run_parallel<E>(
        &mut self,
        engine: &E,
        opts: &RunOptions,
        cancel: &CancelToken,
    ) -> RecogResult<RunSummary>
    where
        E: RecognitionEngine + ?Sized,
    {
        let (source, quad, palette, prep) = self.snapshot(opts)?;
        let mut summary = RunSummary::default();

        let pending: Vec<CellAddress> = CellAddress::all()
            .filter(|addr| !self.state.is_free_cell(*addr))
            .filter(|addr| self.needs_classification(*addr))
            .collect();

        let outcomes: Vec<(CellAddress, CellOutcome)> = pending
            .par_iter()
            .filter_map(|&addr| {
                if cancel.is_cancelled() {
                    return None;
                }
                let outcome =
                    classify_cell(&source, &quad, addr, opts.inset, &palette, &prep, engine);
                Some((addr, outcome))
            })
            .collect();

        summary.classified = outcomes.len();
        summary.cancelled = outcomes.len() < pending.len();
        for (addr, outcome) in &outcomes {
            self.apply(*addr, outcome, &mut summary);
        }

        summary.detected = self.detected_count();
        info!(
            detected = summary.detected,
            classified = summary.classified,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "parallel recognition run finished"
        );
        Ok(summary)
    }

    /// Take the per-run snapshot: upscaled source, pixel-space quad, and
    /// the palette and tolerance frozen against mid-run edits.
    fn snapshot(&self, opts: &RunOptions) -> RecogResult<(Raster, Quad, Palette, PrepOptions)> {
        // Validate the inset once, up front, so per-cell mapping cannot
        // fail on configuration.
        validate_inset(opts.inset)
            .map_err(|e| crate::error::RecogError::Configuration(e.to_string()))?;

        let min_dim = self.source.width().min(self.source.height());
        let factor = if min_dim < opts.min_source_dim {
            opts.min_source_dim.div_ceil(min_dim).min(opts.max_upscale)
        } else {
            1
        };
        let source = if factor > 1 {
            debug!(factor, "upscaling small source before sampling");
            self.source.upscale(factor).unwrap_or_else(|e| {
                warn!(factor, error = %e, "upscale failed, sampling the raw source");
                self.source.clone()
            })
        } else {
            self.source.clone()
        };
        let quad = self.state.corners.to_quad(source.width(), source.height());
        let prep = PrepOptions { tolerance: self.state.tolerance, ..opts.prep.clone() };
        Ok((source, quad, self.state.palette.clone(), prep))
    }

    fn apply(&mut self, addr: CellAddress, outcome: &CellOutcome, summary: &mut RunSummary) {
        match outcome {
            CellOutcome::Skipped => {}
            CellOutcome::Accepted { value, low_confidence } => {
                self.state.set_value(addr, value.to_string());
                self.statuses[addr.row][addr.col] = if *low_confidence {
                    CellStatus::LowConfidence
                } else {
                    CellStatus::Accepted
                };
                self.hints[addr.row][addr.col] = None;
            }
            CellOutcome::Rejected { hint } => {
                self.state.clear_value(addr);
                self.statuses[addr.row][addr.col] = CellStatus::Failed;
                self.hints[addr.row][addr.col] =
                    (!hint.is_empty()).then(|| hint.clone());
                summary.failed += 1;
            }
            CellOutcome::Unreadable | CellOutcome::EngineError(_) => {
                self.statuses[addr.row][addr.col] = CellStatus::Failed;
                summary.failed += 1;
            }
        }
    }

    fn detected_count(&self) -> usize {
        CellAddress::all()
            .filter(|addr| !self.state.is_free_cell(*addr))
            .filter(|addr| self.state.is_validated(*addr))
            .count()
    }
}

/// Classify a single cell: extract, prepare, recognize, accept/reject.
///
/// Pure with respect to the session; all mutation happens when the
/// outcome is applied.
fn classify_cell<E>(
    source: &Raster,
    quad: &Quad,
    addr: CellAddress,
    inset: f32,
    palette: &Palette,
    prep: &PrepOptions,
    engine: &E,
) -> CellOutcome
where
    E: RecognitionEngine + ?Sized,
{
    let Ok(rect) = cell_bounds(quad, addr, inset) else {
        // Inset was validated at run start; treat a failure here as an
        // unreadable cell rather than aborting the card.
        return CellOutcome::Unreadable;
    };
    let cell = match extract(source, addr, rect) {
        Ok(cell) => cell,
        Err(e) => {
            debug!(row = addr.row, col = addr.col, error = %e, "cell not extractable");
            return CellOutcome::Unreadable;
        }
    };
    let glyph = prepare(&cell, palette, prep);
    match engine.recognize(&glyph) {
        Ok(output) => match evaluate(&output) {
            Decision::Accepted { value, low_confidence } => {
                debug!(row = addr.row, col = addr.col, value, "cell accepted");
                CellOutcome::Accepted { value, low_confidence }
            }
            Decision::Rejected { hint } => {
                debug!(row = addr.row, col = addr.col, hint = %hint, "cell rejected");
                CellOutcome::Rejected { hint }
            }
        },
        Err(e) => {
            warn!(row = addr.row, col = addr.col, error = %e, "engine failure");
            CellOutcome::EngineError(e.to_string())
        }
    }
}
