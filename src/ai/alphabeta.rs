use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::game::{Board, Colour, Game, GameOutcome, Move, WinDetector, WIN_LINE_LENGTH};

use super::engine::{Engine, SkillLevel};

/// Score of a won position. Heuristic values stay strictly inside (-1, 1) so
/// a terminal result always dominates positional judgement.
const WIN_SCORE: f64 = 1.0;
const MAX_HEURISTIC: f64 = 0.99;

/// Trait for evaluating a board position from a colour's perspective.
///
/// Implementations must be antisymmetric: `evaluate(board, c)` equals
/// `-evaluate(board, c.other())`, which the negamax recursion relies on.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, colour: Colour) -> f64;
}

/// Weighted count of open partial lines, sharpened per skill level.
///
/// A run of length `len` weighs `10^-(N - len + 1)`: the closer a run is to
/// completion, the more it counts. Higher levels add a bonus for holding
/// several near-complete runs at once and a small penalty for marbles on the
/// outer ring, where a filling lane can push them off the board.
pub struct ThreatHeuristic {
    run_weights: [f64; WIN_LINE_LENGTH],
    double_threat_bonus: f64,
    edge_penalty: f64,
}

impl ThreatHeuristic {
    pub fn for_skill(skill: SkillLevel) -> Self {
        let mut run_weights = [0.0; WIN_LINE_LENGTH];
        for (len, weight) in run_weights.iter_mut().enumerate().skip(2) {
            *weight = 10f64.powi(-((WIN_LINE_LENGTH - len + 1) as i32));
        }
        match skill {
            SkillLevel::Rookie => {
                // Rookie only notices runs one short of a line.
                let mut weights = [0.0; WIN_LINE_LENGTH];
                weights[WIN_LINE_LENGTH - 1] = run_weights[WIN_LINE_LENGTH - 1];
                ThreatHeuristic {
                    run_weights: weights,
                    double_threat_bonus: 0.0,
                    edge_penalty: 0.0,
                }
            }
            SkillLevel::Advanced => ThreatHeuristic {
                run_weights,
                double_threat_bonus: 0.0,
                edge_penalty: 0.0,
            },
            SkillLevel::Expert => ThreatHeuristic {
                run_weights,
                double_threat_bonus: 0.02,
                edge_penalty: 5e-4,
            },
            SkillLevel::Grandmaster => {
                let mut weights = run_weights;
                weights[WIN_LINE_LENGTH - 1] *= 1.5;
                ThreatHeuristic {
                    run_weights: weights,
                    double_threat_bonus: 0.03,
                    edge_penalty: 5e-4,
                }
            }
        }
    }
}

impl Heuristic for ThreatHeuristic {
    fn evaluate(&self, board: &Board, colour: Colour) -> f64 {
        let detector = WinDetector::express();
        let opp = colour.other();
        let mut score = 0.0;

        for len in 2..WIN_LINE_LENGTH {
            let diff = detector.count_runs(board, colour, len) as f64
                - detector.count_runs(board, opp, len) as f64;
            score += diff * self.run_weights[len];
        }

        if self.double_threat_bonus != 0.0 {
            let own = detector.count_runs(board, colour, WIN_LINE_LENGTH - 1);
            let theirs = detector.count_runs(board, opp, WIN_LINE_LENGTH - 1);
            score += self.double_threat_bonus
                * (own.saturating_sub(1) as f64 - theirs.saturating_sub(1) as f64);
        }

        if self.edge_penalty != 0.0 {
            let own_edge = board
                .slots()
                .filter(|&(slot, cell)| slot.on_edge() && cell == colour.cell())
                .count();
            let opp_edge = board
                .slots()
                .filter(|&(slot, cell)| slot.on_edge() && cell == opp.cell())
                .count();
            score -= self.edge_penalty * (own_edge as f64 - opp_edge as f64);
        }

        score.clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
    }
}

/// Minimax engine with alpha-beta pruning over cloned games.
///
/// Children are pre-rated one ply and searched best-first, which lets the
/// cut-off fire early; a rating at the win score stops the search outright.
/// Equal ratings keep move enumeration order, so selection is deterministic
/// apart from the rng-driven opening move.
pub struct AlphaBetaEngine {
    skill: SkillLevel,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new(skill: SkillLevel) -> Self {
        AlphaBetaEngine {
            skill,
            heuristic: Box::new(ThreatHeuristic::for_skill(skill)),
            rng: StdRng::from_os_rng(),
            nodes: 0,
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(skill: SkillLevel, seed: u64) -> Self {
        AlphaBetaEngine {
            skill,
            heuristic: Box::new(ThreatHeuristic::for_skill(skill)),
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn with_heuristic(skill: SkillLevel, heuristic: Box<dyn Heuristic>) -> Self {
        AlphaBetaEngine {
            skill,
            heuristic,
            rng: StdRng::from_os_rng(),
            nodes: 0,
        }
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    /// Clone the game into every legal child, pre-rate each one ply from
    /// `colour`'s perspective, and sort best-first.
    fn order_children(&self, game: &Game, colour: Colour) -> Vec<(Move, Game, f64)> {
        let mut children: Vec<(Move, Game, f64)> = game
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut child = game.clone();
                child.apply_move(mv).unwrap();
                let rating = match child.outcome() {
                    Some(GameOutcome::Winner(w)) if w == colour => WIN_SCORE,
                    Some(GameOutcome::Winner(_)) => -WIN_SCORE,
                    Some(GameOutcome::Draw) => 0.0,
                    None => self.heuristic.evaluate(child.board(), colour),
                };
                (mv, child, rating)
            })
            .collect();
        // Stable sort: equal ratings keep enumeration order.
        children.sort_by(|a, b| b.2.total_cmp(&a.2));
        children
    }

    fn negamax(&mut self, game: &Game, colour: Colour, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        self.nodes += 1;

        if let Some(outcome) = game.outcome() {
            return match outcome {
                GameOutcome::Winner(w) if w == colour => WIN_SCORE,
                GameOutcome::Winner(_) => -WIN_SCORE,
                GameOutcome::Draw => 0.0,
            };
        }
        if depth == 0 {
            return self.heuristic.evaluate(game.board(), colour);
        }

        let children = self.order_children(game, colour);
        let mut best = f64::NEG_INFINITY;
        for (_, child, _) in children {
            let score = -self.negamax(&child, colour.other(), depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta || alpha >= WIN_SCORE {
                break;
            }
        }
        if best == f64::NEG_INFINITY {
            // A mover with no insertion left is the draw case.
            return 0.0;
        }
        best
    }
}

impl Engine for AlphaBetaEngine {
    fn select_move(&mut self, game: &Game) -> Result<Move, EngineError> {
        let colour = game.current_colour().ok_or(EngineError::NoLegalMoves)?;
        let legal = game.legal_moves();
        if legal.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        // The first marbles carry no positional information; play them from
        // the rng.
        if game.board().occupied_slots() <= 1 {
            return Ok(legal[self.rng.random_range(0..legal.len())]);
        }

        let max_depth = if game.board().occupied_slots() < 6 {
            1
        } else {
            self.skill.search_depth()
        };

        self.nodes = 0;
        let children = self.order_children(game, colour);
        let mut alpha = f64::NEG_INFINITY;
        let mut best_move = children[0].0;
        for (mv, child, _) in &children {
            let score = -self.negamax(child, colour.other(), max_depth - 1, f64::NEG_INFINITY, -alpha);
            if score > alpha {
                alpha = score;
                best_move = *mv;
            }
            if alpha >= WIN_SCORE {
                break;
            }
        }

        tracing::debug!(
            %best_move,
            rating = alpha,
            nodes = self.nodes,
            depth = max_depth,
            "selected move"
        );
        Ok(best_move)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
