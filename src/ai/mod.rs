mod alphabeta;
mod engine;
mod random;

pub use alphabeta::{AlphaBetaEngine, Heuristic, ThreatHeuristic};
pub use engine::{Engine, SkillLevel};
pub use random::RandomEngine;
