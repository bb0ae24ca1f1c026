//! Two-player five-in-a-row on a 10x10 board.
//!
//! - [`game`] holds the rules: board, win evaluation and the click-driven state machine.
//! - [`config`] holds the fixed board and canvas dimensions.
//! - [`util`] maps between the game canvas and screen pixels.

pub mod config;
pub mod game;
pub mod util;
