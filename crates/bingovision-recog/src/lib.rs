//! bingovision-recog - Recognition orchestration and win detection
//!
//! The outer layer of the card scanner:
//!
//! - [`RecognitionEngine`]: the opaque text-recognition boundary
//! - [`evaluate`]: the acceptance rule turning raw engine output into a
//!   cell value or a rejection with a correction hint
//! - [`CardState`] / [`CardSession`]: durable card state and the per-run
//!   orchestration (serial and parallel modes, cancellation)
//! - [`detect`] / [`strike_all`]: completed-line evaluation against a
//!   called-numbers list

mod card;
mod classify;
mod engine;
mod error;
mod lines;
mod session;

pub use card::{CardState, CellStatus, FREE_SENTINEL};
pub use classify::{
    Decision, LOW_CONFIDENCE, MAX_NUMBER, MAX_TEXT_LEN, MIN_CONFIDENCE, MIN_NUMBER, evaluate,
};
pub use engine::{EngineOutput, RecognitionEngine};
pub use error::{RecogError, RecogResult};
pub use lines::{Line, LineReport, detect, mark_matrix, parse_called_numbers, strike_all};
pub use session::{CancelToken, CardSession, CellOutcome, RunOptions, RunSummary};
