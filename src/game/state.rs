use tracing::{debug, info};

use super::board::{Board, Coord, Mark};
use super::rules::{evaluate, find_winning_line, Outcome, WinningLine};

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// What a single input event did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The start screen was dismissed.
    Started,
    /// A mark was placed and the turn passed to the other player.
    Placed { coord: Coord, mark: Mark },
    /// A mark was placed and ended the game.
    Finished(Outcome),
    /// The finished game was cleared and a new one began.
    Restarted,
    /// Out-of-board or occupied-cell clicks; nothing changed.
    Ignored,
}

/// Where the headline of a [`Status`] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPlacement {
    Center,
    Top,
}

/// Text shown over the board for the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub headline: String,
    pub placement: StatusPlacement,
    /// Drawn along the bottom edge, if present.
    pub footer: Option<&'static str>,
}

/// Board, turn and phase of one game session. All mutation goes through
/// [`GameState::handle_click`] (or [`GameState::play`] for grid input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Mark,
    phase: Phase,
    outcome: Option<Outcome>,
    winning_line: Option<WinningLine>,
    moves: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh session showing the start screen.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            turn: Mark::FIRST,
            phase: Phase::NotStarted,
            outcome: None,
            winning_line: None,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set only once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Marks placed in the current game.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Applies a click at canvas pixel `(x, y)`.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Transition {
        match self.phase {
            Phase::NotStarted => {
                self.phase = Phase::InProgress;
                info!(first = %self.turn, "game started");
                Transition::Started
            }
            Phase::InProgress => match Coord::from_pixel(x, y) {
                Some(coord) => self.play(coord),
                None => {
                    debug!(x, y, "ignoring click outside the board");
                    Transition::Ignored
                }
            },
            Phase::Finished => {
                self.reset();
                info!("new game started");
                Transition::Restarted
            }
        }
    }

    /// Places the current player's mark at `coord`, then judges the board.
    ///
    /// Does nothing unless a game is in progress and the cell is empty.
    pub fn play(&mut self, coord: Coord) -> Transition {
        if self.phase != Phase::InProgress {
            debug!(phase = ?self.phase, %coord, "ignoring move outside of play");
            return Transition::Ignored;
        }

        let mark = self.turn;
        if let Err(err) = self.board.place(coord, mark) {
            debug!(%err, "ignoring click");
            return Transition::Ignored;
        }
        self.moves += 1;

        match evaluate(&self.board) {
            Some(outcome) => {
                self.phase = Phase::Finished;
                self.outcome = Some(outcome);
                self.winning_line = find_winning_line(&self.board);
                match outcome {
                    Outcome::Winner(winner) => {
                        info!(%winner, moves = self.moves, "game won")
                    }
                    Outcome::Draw => info!(moves = self.moves, "game drawn"),
                }
                Transition::Finished(outcome)
            }
            None => {
                self.turn = mark.other();
                Transition::Placed { coord, mark }
            }
        }
    }

    /// Clears the board and goes straight back into play with `X` to move.
    fn reset(&mut self) {
        self.board.clear();
        self.turn = Mark::FIRST;
        self.outcome = None;
        self.winning_line = None;
        self.moves = 0;
        self.phase = Phase::InProgress;
    }

    pub fn status(&self) -> Status {
        match (self.phase, self.outcome) {
            (Phase::NotStarted, _) => Status {
                headline: "Click to play".to_string(),
                placement: StatusPlacement::Center,
                footer: None,
            },
            (Phase::InProgress, _) => Status {
                headline: format!("Turn: {}", self.turn),
                placement: StatusPlacement::Top,
                footer: None,
            },
            (Phase::Finished, outcome) => Status {
                headline: match outcome {
                    Some(Outcome::Winner(mark)) => format!("Player {mark} wins!"),
                    Some(Outcome::Draw) | None => "Draw!".to_string(),
                },
                placement: StatusPlacement::Top,
                footer: Some("Click to play again"),
            },
        }
    }
}
