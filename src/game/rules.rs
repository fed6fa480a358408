use std::sync::OnceLock;

use super::board::{Board, BOARD_SIZE};
use super::colour::Colour;
use super::moves::Slot;

/// Winning line length for the two-player express game.
pub const WIN_LINE_LENGTH: usize = 4;

/// Detects completed and partial lines by scanning precomputed windows of
/// contiguous slots across rows, columns, and both diagonals.
#[derive(Debug)]
pub struct WinDetector {
    line_length: usize,
    windows: Vec<Vec<Slot>>,
}

impl WinDetector {
    /// Build a detector for lines of `line_length` slots.
    pub fn new(line_length: usize) -> Self {
        assert!(
            (4..=5).contains(&line_length),
            "illegal winning line length: {line_length}"
        );
        let mut windows = Vec::new();

        for row in 0..BOARD_SIZE {
            for col in 0..=BOARD_SIZE - line_length {
                windows.push((0..line_length).map(|i| Slot::new(col + i, row)).collect());
            }
        }
        for col in 0..BOARD_SIZE {
            for row in 0..=BOARD_SIZE - line_length {
                windows.push((0..line_length).map(|i| Slot::new(col, row + i)).collect());
            }
        }
        // Descending diagonals (\) and ascending diagonals (/).
        for row in 0..=BOARD_SIZE - line_length {
            for col in 0..=BOARD_SIZE - line_length {
                windows.push(
                    (0..line_length)
                        .map(|i| Slot::new(col + i, row + i))
                        .collect(),
                );
            }
        }
        for row in line_length - 1..BOARD_SIZE {
            for col in 0..=BOARD_SIZE - line_length {
                windows.push(
                    (0..line_length)
                        .map(|i| Slot::new(col + i, row - i))
                        .collect(),
                );
            }
        }

        WinDetector {
            line_length,
            windows,
        }
    }

    /// The shared detector for the express game's line length.
    pub fn express() -> &'static WinDetector {
        static DETECTOR: OnceLock<WinDetector> = OnceLock::new();
        DETECTOR.get_or_init(|| WinDetector::new(WIN_LINE_LENGTH))
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// True if `colour` owns at least one complete line.
    pub fn has_line(&self, board: &Board, colour: Colour) -> bool {
        let cell = colour.cell();
        self.windows
            .iter()
            .any(|window| window.iter().all(|&slot| board.cell(slot) == cell))
    }

    /// Colours owning at least one complete line, in `Colour::ALL` order.
    /// A single insertion can complete lines for both colours through the
    /// shift, so the result may hold two entries.
    pub fn winners(&self, board: &Board) -> Vec<Colour> {
        Colour::ALL
            .into_iter()
            .filter(|&colour| self.has_line(board, colour))
            .collect()
    }

    /// Number of windows holding exactly `len` marbles of `colour` and no
    /// opponent marble. These open partial runs drive the AI heuristic.
    pub fn count_runs(&self, board: &Board, colour: Colour, len: usize) -> usize {
        let own = colour.cell();
        let opp = colour.other().cell();
        self.windows
            .iter()
            .filter(|window| {
                let mut own_count = 0;
                for &slot in window.iter() {
                    let cell = board.cell(slot);
                    if cell == opp {
                        return false;
                    }
                    if cell == own {
                        own_count += 1;
                    }
                }
                own_count == len
            })
            .count()
    }
}
