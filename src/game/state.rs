use rand::Rng;

use crate::error::{GameError, IllegalMoveReason};

use super::board::{Board, ShiftResult, MARBLES_PER_COLOUR};
use super::colour::Colour;
use super::moves::Move;
use super::rules::WinDetector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Colour),
    Draw,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(colour) => write!(f, "{colour} has won"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Progression phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    InProgress { current_colour: Colour },
    Over(GameOutcome),
}

/// A running game: board, side to move, and terminal outcome. Exactly one
/// move is applied at a time; the phase becomes terminal the instant a win
/// or draw is detected and never leaves that state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    phase: Phase,
    move_count: u32,
}

impl Game {
    /// Start a new game on an empty board, drawing the starting colour by
    /// lot from the supplied rng.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let starter = Colour::ALL[rng.random_range(0..Colour::ALL.len())];
        Self::with_starting_colour(starter)
    }

    /// Start a new game with a pinned starting colour.
    pub fn with_starting_colour(colour: Colour) -> Self {
        Self::from_board(Board::new(), colour)
    }

    /// Resume from an arbitrary board position with `colour` to move. The
    /// position is taken as given; outcome detection happens on the next
    /// applied move.
    pub fn from_board(board: Board, colour: Colour) -> Self {
        Game {
            board,
            phase: Phase::InProgress {
                current_colour: colour,
            },
            move_count: 0,
        }
    }

    /// The colour whose turn it is, or `None` once the game is over.
    pub fn current_colour(&self) -> Option<Colour> {
        match self.phase {
            Phase::InProgress { current_colour } => Some(current_colour),
            Phase::Over(_) => None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Over(outcome) => Some(outcome),
            Phase::InProgress { .. } => None,
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Legal insertion moves for the side to move; empty once the game is
    /// over or the mover's supply is exhausted.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.current_colour() {
            Some(colour) => self.board.legal_moves(colour),
            None => Vec::new(),
        }
    }

    /// Apply a move for the side to move.
    ///
    /// The board mutates once, then the win detector runs. When a single
    /// insertion completes lines for both colours through the shift, the
    /// mover's colour wins the tie. A line completed for the opponent alone
    /// loses the game on the mover's own move.
    pub fn apply_move(&mut self, mv: Move) -> Result<ShiftResult, GameError> {
        let current = match self.phase {
            Phase::Over(_) => return Err(GameError::GameAlreadyOver),
            Phase::InProgress { current_colour } => current_colour,
        };

        if !Move::lane_is_valid(mv.lane) {
            return Err(GameError::IllegalMove {
                mv,
                reason: IllegalMoveReason::InvalidLane,
            });
        }
        if self.board.count_marbles(current) >= MARBLES_PER_COLOUR {
            return Err(GameError::IllegalMove {
                mv,
                reason: IllegalMoveReason::SupplyExhausted(current),
            });
        }

        let result = self
            .board
            .insert(mv.side, mv.lane, current)
            .map_err(|_| GameError::IllegalMove {
                mv,
                reason: IllegalMoveReason::InvalidLane,
            })?;
        self.move_count += 1;

        let winners = WinDetector::express().winners(&self.board);
        if !winners.is_empty() {
            let winner = if winners.contains(&current) {
                current
            } else {
                current.other()
            };
            self.phase = Phase::Over(GameOutcome::Winner(winner));
        } else {
            let next = current.other();
            if self.board.is_full() || self.board.count_marbles(next) >= MARBLES_PER_COLOUR {
                // The side to move would have no legal insertion left.
                self.phase = Phase::Over(GameOutcome::Draw);
            } else {
                self.phase = Phase::InProgress {
                    current_colour: next,
                };
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Side, Slot};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(text: &str) -> Board {
        Board::from_text(text).unwrap()
    }

    #[test]
    fn test_new_game_draws_a_starter() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = Game::new(&mut rng);
        assert!(game.current_colour().is_some());
        assert!(!game.is_over());
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::with_starting_colour(Colour::Blue);
        game.apply_move(Move::new(Side::Left, 1)).unwrap();
        assert_eq!(game.current_colour(), Some(Colour::Orange));
        game.apply_move(Move::new(Side::Left, 2)).unwrap();
        assert_eq!(game.current_colour(), Some(Colour::Blue));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut game = Game::with_starting_colour(Colour::Blue);
        let err = game.apply_move(Move::new(Side::Top, 0)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                mv: Move::new(Side::Top, 0),
                reason: IllegalMoveReason::InvalidLane,
            }
        );
        assert_eq!(game.current_colour(), Some(Colour::Blue));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board().occupied_slots(), 0);
    }

    #[test]
    fn test_win_ends_the_game_exactly_once() {
        let mut game = Game::from_board(
            board(
                "_|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|B|B|B|_
                 _|_|O|_|_|O|_",
            ),
            Colour::Blue,
        );
        game.apply_move(Move::new(Side::Right, 5)).unwrap();

        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Colour::Blue)));
        assert_eq!(game.current_colour(), None);
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.apply_move(Move::new(Side::Left, 1)),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_mover_wins_double_line_tie() {
        // Inserting blue at the top of column 3 pushes the chain down one
        // step: blue completes rows 0..=3 of the column while the displaced
        // orange marble lands on (3, 6), completing orange's bottom row.
        let mut game = Game::from_board(
            board(
                "_|_|_|B|_|_|_
                 _|_|_|B|_|_|_
                 _|_|_|B|_|_|_
                 _|_|_|O|_|_|_
                 _|_|_|O|_|_|_
                 _|_|_|O|_|_|_
                 O|O|O|_|_|_|_",
            ),
            Colour::Blue,
        );
        game.apply_move(Move::new(Side::Top, 3)).unwrap();

        assert_eq!(game.board().cell_at(Slot::new(3, 6)).unwrap(), Cell::Orange);
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Colour::Blue)));
    }

    #[test]
    fn test_shift_can_lose_the_game_for_the_mover() {
        // Blue's insertion closes the gap in orange's row; only orange ends
        // up with a complete line, so orange wins on blue's move.
        let mut game = Game::from_board(
            board(
                "_|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 O|O|O|_|O|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_
                 _|_|_|_|_|_|_",
            ),
            Colour::Blue,
        );
        game.apply_move(Move::new(Side::Left, 2)).unwrap();

        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Colour::Orange)));
    }

    // Orange has its full supply of 22 marbles on the board, none of them in
    // four-in-a-row formation.
    const ORANGE_SUPPLY_OUT: &str = "O|O|O|_|O|O|O
                                     O|O|O|_|O|O|O
                                     O|O|O|_|O|O|O
                                     _|_|_|_|_|_|_
                                     O|O|O|_|O|_|_
                                     _|_|_|_|_|_|_
                                     B|_|B|_|B|_|B";

    #[test]
    fn test_draw_when_next_colour_supply_is_exhausted() {
        let mut game = Game::from_board(board(ORANGE_SUPPLY_OUT), Colour::Blue);
        assert_eq!(game.board().count_marbles(Colour::Orange), MARBLES_PER_COLOUR);

        game.apply_move(Move::new(Side::Left, 5)).unwrap();

        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_supply_exhausted_move_is_rejected() {
        let mut game = Game::from_board(board(ORANGE_SUPPLY_OUT), Colour::Orange);

        assert!(game.legal_moves().is_empty());
        let err = game.apply_move(Move::new(Side::Left, 5)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                mv: Move::new(Side::Left, 5),
                reason: IllegalMoveReason::SupplyExhausted(Colour::Orange),
            }
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            GameOutcome::Winner(Colour::Orange).to_string(),
            "Orange has won"
        );
        assert_eq!(GameOutcome::Draw.to_string(), "draw");
    }
}
