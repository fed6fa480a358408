//! Core Shiftago game logic: board representation with the insert-and-shift
//! mechanic, win-line detection, and the turn state machine.

mod board;
mod colour;
mod moves;
mod rules;
mod state;

pub use board::{Board, Cell, ShiftResult, BOARD_SIZE, MARBLES_PER_COLOUR};
pub use colour::Colour;
pub use moves::{Move, Side, Slot};
pub use rules::{WinDetector, WIN_LINE_LENGTH};
pub use state::{Game, GameOutcome};
