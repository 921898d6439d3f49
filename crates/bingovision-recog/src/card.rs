//! Persisted card state
//!
//! Everything needed to reconstruct a card without re-running
//! recognition: the corner handles, the free-cell flag, the 5x5 confirmed
//! values, and the background-removal settings. Serialized as JSON by the
//! storage collaborator; this crate only defines the shape.

use bingovision_core::Palette;
use bingovision_grid::{CellAddress, CornerSet, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Sentinel stored in the center cell while the free-cell rule is on.
pub const FREE_SENTINEL: &str = "FREE";

/// Per-cell recognition status.
///
/// Re-run eligibility is a pure function of this tag: a cell holding a
/// validated value is skipped unless it is `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    /// Never classified.
    #[default]
    Unprocessed,
    /// Holds an accepted recognition result.
    Accepted,
    /// Accepted, but flagged for user review.
    LowConfidence,
    /// Classification was attempted and rejected (or the cell was
    /// unreadable); eligible for retry.
    Failed,
    /// Value entered or confirmed by the user.
    UserConfirmed,
}

/// One card's durable state.
///
/// Cell values are strings: empty = unknown, [`FREE_SENTINEL`] in the
/// center when the free cell is enabled, otherwise the confirmed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub corners: CornerSet,
    free_enabled: bool,
    values: [[String; GRID_SIZE]; GRID_SIZE],
    pub palette: Palette,
    pub tolerance: u32,
}

impl CardState {
    pub fn new(corners: CornerSet, free_enabled: bool) -> Self {
        let mut state = Self {
            corners,
            free_enabled,
            values: Default::default(),
            palette: Palette::default(),
            tolerance: 60,
        };
        state.seed_free_cell();
        state
    }

    pub fn free_enabled(&self) -> bool {
        self.free_enabled
    }

    /// Toggle the free-cell rule, seeding or clearing the sentinel.
    pub fn set_free_enabled(&mut self, enabled: bool) {
        self.free_enabled = enabled;
        self.seed_free_cell();
    }

    /// Whether this address is currently the always-marked free cell.
    pub fn is_free_cell(&self, addr: CellAddress) -> bool {
        self.free_enabled && addr.is_free()
    }

    fn seed_free_cell(&mut self) {
        let center = GRID_SIZE / 2;
        let slot = &mut self.values[center][center];
        if self.free_enabled {
            *slot = FREE_SENTINEL.to_string();
        } else if slot == FREE_SENTINEL {
            slot.clear();
        }
    }

    pub fn value(&self, addr: CellAddress) -> &str {
        &self.values[addr.row][addr.col]
    }

    /// Store a confirmed value. Writes to the active free cell are
    /// ignored; that cell is owned by the free-cell rule.
    pub fn set_value(&mut self, addr: CellAddress, value: impl Into<String>) {
        if self.is_free_cell(addr) {
            return;
        }
        self.values[addr.row][addr.col] = value.into();
    }

    pub fn clear_value(&mut self, addr: CellAddress) {
        if self.is_free_cell(addr) {
            return;
        }
        self.values[addr.row][addr.col].clear();
    }

    /// Whether the cell holds a validated bingo number (one or two ASCII
    /// digits).
    pub fn is_validated(&self, addr: CellAddress) -> bool {
        let v = self.value(addr).trim();
        !v.is_empty() && v.len() <= 2 && v.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(CornerSet::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(row: usize, col: usize) -> CellAddress {
        CellAddress::new(row, col).unwrap()
    }

    #[test]
    fn free_cell_is_seeded_and_cleared() {
        let mut state = CardState::new(CornerSet::default(), true);
        assert_eq!(state.value(addr(2, 2)), FREE_SENTINEL);
        state.set_free_enabled(false);
        assert_eq!(state.value(addr(2, 2)), "");
    }

    #[test]
    fn free_cell_rejects_writes_while_enabled() {
        let mut state = CardState::default();
        state.set_value(addr(2, 2), "42");
        assert_eq!(state.value(addr(2, 2)), FREE_SENTINEL);
        state.set_free_enabled(false);
        state.set_value(addr(2, 2), "42");
        assert_eq!(state.value(addr(2, 2)), "42");
    }

    #[test]
    fn validation_requires_one_or_two_digits() {
        let mut state = CardState::new(CornerSet::default(), false);
        state.set_value(addr(0, 0), "7");
        state.set_value(addr(0, 1), "75");
        state.set_value(addr(0, 2), "7b");
        state.set_value(addr(0, 3), "123");
        assert!(state.is_validated(addr(0, 0)));
        assert!(state.is_validated(addr(0, 1)));
        assert!(!state.is_validated(addr(0, 2)));
        assert!(!state.is_validated(addr(0, 3)));
        assert!(!state.is_validated(addr(0, 4)));
    }
}
