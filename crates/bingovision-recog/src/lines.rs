//! Line completion detection
//!
//! Given a 5x5 marked matrix, finds every fully marked row, column, and
//! main diagonal. Scan order is fixed for reproducibility: rows 0-4, then
//! columns 0-4, then the top-left and top-right diagonals.

use crate::card::CardState;
use crate::error::{RecogError, RecogResult};
use bingovision_grid::{CellAddress, GRID_SIZE};

/// A completed line on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
    /// 0 = top-left to bottom-right, 1 = top-right to bottom-left.
    Diag(usize),
}

/// The completed lines of one evaluation, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineReport {
    pub lines: Vec<Line>,
}

impl LineReport {
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn has_bingo(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Find all completed lines in a marked matrix.
///
/// Pure and total: the matrix is always fully populated (the free cell is
/// pre-seeded before this is called), so there is no invalid input.
pub fn detect(marked: &[[bool; GRID_SIZE]; GRID_SIZE]) -> LineReport {
    let mut lines = Vec::new();
    for (r, row) in marked.iter().enumerate() {
        if row.iter().all(|&m| m) {
            lines.push(Line::Row(r));
        }
    }
    for c in 0..GRID_SIZE {
        if (0..GRID_SIZE).all(|r| marked[r][c]) {
            lines.push(Line::Col(c));
        }
    }
    if (0..GRID_SIZE).all(|i| marked[i][i]) {
        lines.push(Line::Diag(0));
    }
    if (0..GRID_SIZE).all(|i| marked[i][GRID_SIZE - 1 - i]) {
        lines.push(Line::Diag(1));
    }
    LineReport { lines }
}

/// Split a comma-separated called-numbers string into trimmed tokens,
/// discarding empties. Tokens are compared verbatim against cell values;
/// non-numeric tokens simply never match.
pub fn parse_called_numbers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the marked matrix for a card against the called numbers.
///
/// Recomputed on every evaluation, never persisted. The free cell is
/// pre-marked when enabled; every other cell is marked iff its trimmed
/// confirmed value exactly matches a called token.
pub fn mark_matrix(state: &CardState, called: &[String]) -> [[bool; GRID_SIZE]; GRID_SIZE] {
    let mut marked = [[false; GRID_SIZE]; GRID_SIZE];
    for addr in CellAddress::all() {
        if state.is_free_cell(addr) {
            marked[addr.row][addr.col] = true;
            continue;
        }
        let value = state.value(addr).trim();
        if !value.is_empty() && called.iter().any(|t| t == value) {
            marked[addr.row][addr.col] = true;
        }
    }
    marked
}

/// Evaluate every card against a called-numbers string.
///
/// # Errors
///
/// Fails before any processing if the called string parses to nothing
/// ([`RecogError::NoCalledNumbers`]) or no cards were supplied
/// ([`RecogError::NoCards`]). Per-card results never fail.
pub fn strike_all(cards: &[CardState], called: &str) -> RecogResult<Vec<LineReport>> {
    let tokens = parse_called_numbers(called);
    if tokens.is_empty() {
        return Err(RecogError::NoCalledNumbers);
    }
    if cards.is_empty() {
        return Err(RecogError::NoCards);
    }
    Ok(cards
        .iter()
        .map(|card| detect(&mark_matrix(card, &tokens)))
        .collect())
}
