//! Gomoku game logic: the grid of marks, five-in-a-row evaluation, and the
//! start/play/end state machine driven by clicks.

mod board;
mod rules;
mod state;

pub use board::{Board, Coord, Mark, PlaceError};
pub use rules::{evaluate, find_winning_line, Direction, Outcome, WinningLine};
pub use state::{GameState, Phase, Status, StatusPlacement, Transition};
