//! The 3x3 grid and its win/draw evaluation.
//!
//! The board performs no validation beyond what its types enforce: callers
//! check occupancy with [`Board::is_empty_at`] before calling [`Board::place`].

use serde::{Deserialize, Serialize};

use crate::config::game::BOARD_SIZE;
use crate::game::types::{CellState, Position, Role};

/// Every winning triple: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = Default::default();
    }

    pub fn cell(&self, position: Position) -> CellState {
        self.cells[position.row()][position.col()]
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.cell(position) == CellState::Empty
    }

    /// Mark `position` with `role`. The cell must be empty.
    pub fn place(&mut self, position: Position, role: Role) {
        debug_assert!(
            self.is_empty_at(position),
            "place() called on occupied cell {:?}",
            position
        );
        self.cells[position.row()][position.col()] = role.into();
    }

    /// True iff one of the eight lines is fully owned by `role`.
    pub fn has_won(&self, role: Role) -> bool {
        let mark = CellState::from(role);
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == mark))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c != CellState::Empty)
    }

    #[cfg(test)]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != CellState::Empty).count()
    }
}
