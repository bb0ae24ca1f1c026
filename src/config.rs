//! Fixed board and canvas dimensions.

/// The number of cells along each side of the (square) board.
pub const GRID_SIZE: usize = 10;

/// How many identical marks in a straight line win the game.
pub const WIN_LENGTH: usize = 5;

/// Side length of the logical drawing canvas, in canvas pixels.
pub const CANVAS_SIZE: f32 = 500.0;

/// Side length of a single cell, in canvas pixels.
pub const CELL_SIZE: f32 = CANVAS_SIZE / GRID_SIZE as f32;

/// Font size used for the X/O marks.
pub const MARK_FONT_SIZE: f32 = CELL_SIZE * 0.6;

/// Font size used for the status messages.
pub const STATUS_FONT_SIZE: f32 = 24.0;

/// Distance of the status messages from the top (and bottom) edge of the canvas.
pub const STATUS_MARGIN: f32 = 30.0;
