use derive_more::{Display, Error};

use crate::config::{CELL_SIZE, GRID_SIZE};

/// A symbol placed by one of the two players. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    /// The mark that moves first in every game.
    pub const FIRST: Mark = Mark::X;

    /// Get the opponent's mark
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell address on the board. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Option<Coord> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Coord { row, col })
    }

    /// Maps a canvas pixel position onto the cell containing it.
    ///
    /// Returns `None` for positions left of/above the board, past its far edges,
    /// or not finite.
    pub fn from_pixel(x: f32, y: f32) -> Option<Coord> {
        let index = |v: f32| {
            let i = (v / CELL_SIZE).floor();
            (i.is_finite() && i >= 0.0 && i < GRID_SIZE as f32).then_some(i as usize)
        };
        Coord::new(index(y)?, index(x)?)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Moves `steps` cells by `(d_row, d_col)`, or `None` if that leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize, steps: usize) -> Option<Coord> {
        let steps = steps as isize;
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;
        if row < 0 || col < 0 {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    #[display("cell {coord} is already taken by {mark}")]
    Occupied { coord: Coord, mark: Mark },
}

/// The 10x10 playing grid, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.row][coord.col]
    }

    /// Puts `mark` on an empty cell. Occupied cells are never overwritten.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), PlaceError> {
        let cell = &mut self.cells[coord.row][coord.col];
        if let Some(existing) = *cell {
            return Err(PlaceError::Occupied {
                coord,
                mark: existing,
            });
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Option<Mark>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord { row, col }, cell))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_other_mark() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
        assert_eq!(Mark::FIRST, Mark::X);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(9, 9).is_some());
        assert!(Coord::new(10, 0).is_none());
        assert!(Coord::new(0, 10).is_none());
    }

    #[test]
    fn test_from_pixel() {
        assert_eq!(Coord::from_pixel(0.0, 0.0), Some(at(0, 0)));
        assert_eq!(Coord::from_pixel(49.9, 49.9), Some(at(0, 0)));
        // x picks the column, y picks the row
        assert_eq!(Coord::from_pixel(120.0, 260.0), Some(at(5, 2)));
        assert_eq!(Coord::from_pixel(499.0, 499.0), Some(at(9, 9)));
    }

    #[test]
    fn test_from_pixel_outside() {
        assert_eq!(Coord::from_pixel(500.0, 10.0), None);
        assert_eq!(Coord::from_pixel(10.0, 500.0), None);
        assert_eq!(Coord::from_pixel(-0.5, 10.0), None);
        assert_eq!(Coord::from_pixel(10.0, -20.0), None);
        assert_eq!(Coord::from_pixel(f32::NAN, 10.0), None);
        assert_eq!(Coord::from_pixel(f32::INFINITY, 10.0), None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(at(0, 0).offset(1, 1, 4), Some(at(4, 4)));
        assert_eq!(at(0, 4).offset(1, -1, 4), Some(at(4, 0)));
        assert_eq!(at(0, 3).offset(1, -1, 4), None);
        assert_eq!(at(6, 0).offset(1, 0, 4), None);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        assert!(board.is_empty());
        board.place(at(3, 4), Mark::X).unwrap();
        assert_eq!(board.get(at(3, 4)), Some(Mark::X));
        assert_eq!(board.get(at(4, 3)), None);
        assert_eq!(board.count(Mark::X), 1);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        board.place(at(2, 2), Mark::X).unwrap();
        let err = board.place(at(2, 2), Mark::O).unwrap_err();
        assert_eq!(
            err,
            PlaceError::Occupied {
                coord: at(2, 2),
                mark: Mark::X
            }
        );
        assert_eq!(err.to_string(), "cell (2, 2) is already taken by X");
        assert_eq!(board.get(at(2, 2)), Some(Mark::X));
    }

    #[test]
    fn test_full_and_clear() {
        let mut board = Board::new();
        for (coord, _) in Board::new().iter() {
            board.place(coord, Mark::O).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::O), GRID_SIZE * GRID_SIZE);

        board.clear();
        assert!(board.is_empty());
        assert!(!board.is_full());
    }

    #[test]
    fn test_iter_is_row_major() {
        let coords: Vec<Coord> = Board::new().iter().map(|(c, _)| c).take(12).collect();
        assert_eq!(coords[0], at(0, 0));
        assert_eq!(coords[9], at(0, 9));
        assert_eq!(coords[10], at(1, 0));
        assert_eq!(coords[11], at(1, 1));
    }
}
