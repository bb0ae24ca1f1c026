//! Five-in-a-row detection.

use tracing::instrument;

use super::board::{Board, Coord, Mark};
use crate::config::WIN_LENGTH;

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

/// The four line directions, listed in the order they are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, column) step between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// The `WIN_LENGTH` cells starting at `start`, or `None` if they do not all fit
    /// on the board. Lines never wrap between rows or columns.
    pub fn line_from(self, start: Coord) -> Option<[Coord; WIN_LENGTH]> {
        let (d_row, d_col) = self.step();
        let mut cells = [start; WIN_LENGTH];
        for (k, cell) in cells.iter_mut().enumerate().skip(1) {
            *cell = start.offset(d_row, d_col, k)?;
        }
        Some(cells)
    }
}

/// A completed run of `WIN_LENGTH` identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub direction: Direction,
    pub cells: [Coord; WIN_LENGTH],
}

impl WinningLine {
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    pub fn end(&self) -> Coord {
        self.cells[WIN_LENGTH - 1]
    }
}

/// Finds the first winning line, scanning start cells row-major and, per start
/// cell, directions in [`Direction::ALL`] order.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    for (start, cell) in board.iter() {
        let Some(mark) = cell else { continue };

        for direction in Direction::ALL {
            let Some(cells) = direction.line_from(start) else {
                continue;
            };
            if cells[1..].iter().all(|&c| board.get(c) == Some(mark)) {
                return Some(WinningLine {
                    mark,
                    direction,
                    cells,
                });
            }
        }
    }

    None
}

/// Judges the board: a winner if any line is complete, a draw if the board is
/// full without one, and `None` while the game can go on.
#[instrument(level = "trace", skip_all)]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(line) = find_winning_line(board) {
        return Some(Outcome::Winner(line.mark));
    }
    board.is_full().then_some(Outcome::Draw)
}
