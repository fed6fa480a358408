use crate::error::BoardError;

use super::colour::Colour;
use super::moves::{Move, Side, Slot};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 7;
/// Marble supply per colour. A marble pushed off the board returns to the
/// owner's supply, so this caps the marbles a colour has on the board at once.
pub const MARBLES_PER_COLOUR: usize = 22;

/// Content of a single board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blue,
    Orange,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Blue => 'B',
            Cell::Orange => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '_' => Some(Cell::Empty),
            'B' => Some(Cell::Blue),
            'O' => Some(Cell::Orange),
            _ => None,
        }
    }

    /// The colour occupying the cell, if any.
    pub fn colour(self) -> Option<Colour> {
        match self {
            Cell::Empty => None,
            Cell::Blue => Some(Colour::Blue),
            Cell::Orange => Some(Colour::Orange),
        }
    }
}

/// Outcome of a single insertion, for rendering and bookkeeping.
///
/// `changed` lists the slots whose content changed, ordered from the entry
/// slot inward along the insertion lane. `discarded` is the colour of a
/// marble pushed off the far end, if the lane was full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResult {
    pub inserted: Slot,
    pub changed: Vec<Slot>,
    pub discarded: Option<Colour>,
}

/// The 7×7 grid of slots. `insert` is the sole mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a slot, failing with `OutOfRange` outside the grid.
    pub fn cell_at(&self, slot: Slot) -> Result<Cell, BoardError> {
        if !slot.in_bounds() {
            return Err(BoardError::OutOfRange {
                col: slot.col,
                row: slot.row,
            });
        }
        Ok(self.cells[slot.row][slot.col])
    }

    /// Cell lookup for slots already known to be on the board.
    pub(crate) fn cell(&self, slot: Slot) -> Cell {
        self.cells[slot.row][slot.col]
    }

    fn set(&mut self, slot: Slot, cell: Cell) {
        self.cells[slot.row][slot.col] = cell;
    }

    /// Insert a marble of `colour` at `lane` on `side`, shifting any occupied
    /// chain one step inward. With a full lane the innermost marble is pushed
    /// off the board. Fails with `InvalidLane` before touching the board.
    pub fn insert(&mut self, side: Side, lane: usize, colour: Colour) -> Result<ShiftResult, BoardError> {
        if !Move::lane_is_valid(lane) {
            return Err(BoardError::InvalidLane { side, lane });
        }

        let lane_slots = side.lane_slots(lane);
        let first_empty = lane_slots.iter().position(|&s| self.cell(s) == Cell::Empty);

        let (chain_end, discarded) = match first_empty {
            // The chain of occupied slots to shift ends where the first empty
            // slot absorbs it, or at the far end of a full lane.
            Some(depth) => (depth, None),
            None => {
                let far = lane_slots[BOARD_SIZE - 1];
                (BOARD_SIZE - 1, self.cell(far).colour())
            }
        };

        for depth in (1..=chain_end).rev() {
            self.set(lane_slots[depth], self.cell(lane_slots[depth - 1]));
        }
        self.set(lane_slots[0], colour.cell());

        Ok(ShiftResult {
            inserted: lane_slots[0],
            changed: lane_slots[..=chain_end].to_vec(),
            discarded,
        })
    }

    /// Number of marbles of `colour` currently on the board.
    pub fn count_marbles(&self, colour: Colour) -> usize {
        self.slots()
            .filter(|&(_, cell)| cell == colour.cell())
            .count()
    }

    /// Number of occupied slots.
    pub fn occupied_slots(&self) -> usize {
        self.slots().filter(|&(_, cell)| cell != Cell::Empty).count()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.occupied_slots() == BOARD_SIZE * BOARD_SIZE
    }

    /// Iterate over all slots and their contents, row by row.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Cell)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).map(move |col| {
                let slot = Slot::new(col, row);
                (slot, self.cell(slot))
            })
        })
    }

    /// All legal insertion moves for `colour`: every non-corner lane on all
    /// four sides, unless the colour's supply is exhausted. Enumeration order
    /// is deterministic (sides in declaration order, lanes ascending).
    pub fn legal_moves(&self, colour: Colour) -> Vec<Move> {
        if self.count_marbles(colour) >= MARBLES_PER_COLOUR {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity(4 * (BOARD_SIZE - 2));
        for side in Side::ALL {
            for lane in 1..BOARD_SIZE - 1 {
                moves.push(Move::new(side, lane));
            }
        }
        moves
    }

    /// Parse a board from the text format produced by `Display`: one line per
    /// row, cells `_`/`B`/`O` separated by `|`.
    pub fn from_text(text: &str) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let rows: Vec<&str> = text.trim().lines().map(str::trim).collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::Parse(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split('|').collect();
            if cells.len() != BOARD_SIZE {
                return Err(BoardError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    BOARD_SIZE
                )));
            }
            for (col, text_cell) in cells.iter().enumerate() {
                let mut chars = text_cell.chars();
                let cell = match (chars.next().and_then(Cell::from_symbol), chars.next()) {
                    (Some(cell), None) => cell,
                    _ => {
                        return Err(BoardError::Parse(format!(
                            "unrecognised cell '{}' at ({}, {})",
                            text_cell, col, row
                        )))
                    }
                };
                board.set(Slot::new(col, row), cell);
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    f.write_str("|")?;
                }
                write!(f, "{}", self.cells[row][col].symbol())?;
            }
            if row < BOARD_SIZE - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
