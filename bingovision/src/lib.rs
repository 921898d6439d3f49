//! BingoVision - bingo card scanning for Rust
//!
//! Maps a photographed (possibly skewed) 5x5 bingo card onto a grid,
//! extracts each cell as a clean binary glyph for digit recognition, and
//! evaluates completed rows, columns, and diagonals against a list of
//! called numbers.
//!
//! # Overview
//!
//! - [`grid`]: corner handles, bilinear quadrilateral mapper, cell
//!   extraction with inset margins
//! - [`prep`]: the fixed preprocessing sequence producing OCR-ready
//!   glyphs (background suppression, Otsu binarization, denoising,
//!   rescale and pad)
//! - [`recog`]: the recognition-engine boundary, card sessions with
//!   serial and parallel run modes, and the line detector
//!
//! Rendering, capture, upload, and storage live outside this workspace;
//! the recognition engine itself is an opaque collaborator behind
//! [`recog::RecognitionEngine`].
//!
//! # Example
//!
//! ```
//! use bingovision::recog::{CardState, detect, mark_matrix, parse_called_numbers};
//! use bingovision::grid::CornerSet;
//!
//! let card = CardState::new(CornerSet::default(), true);
//! let called = parse_called_numbers("7, 23, 45");
//! let report = detect(&mark_matrix(&card, &called));
//! assert_eq!(report.count(), 0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bingovision_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bingovision_grid as grid;
pub use bingovision_prep as prep;
pub use bingovision_recog as recog;
