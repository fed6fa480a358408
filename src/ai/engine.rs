use crate::error::EngineError;
use crate::game::{Game, Move};

/// Named strength configuration for the AI opponent. Each level maps to a
/// search depth and evaluator sharpness; the mapping is tunable data, not
/// board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Rookie,
    Advanced,
    Expert,
    Grandmaster,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Rookie,
        SkillLevel::Advanced,
        SkillLevel::Expert,
        SkillLevel::Grandmaster,
    ];

    /// Maximum adversarial search depth for this level.
    pub fn search_depth(self) -> usize {
        match self {
            SkillLevel::Rookie => 1,
            SkillLevel::Advanced => 2,
            SkillLevel::Expert => 3,
            SkillLevel::Grandmaster => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SkillLevel::Rookie => "Rookie",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
            SkillLevel::Grandmaster => "Grandmaster",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Universal interface for move-selecting engines.
///
/// `Send` so a presentation shell can run selection on a background thread
/// while staying responsive; engines only ever explore clones and never
/// mutate the live game.
pub trait Engine: Send {
    /// Select an insertion move for the side to move.
    fn select_move(&mut self, game: &Game) -> Result<Move, EngineError>;

    /// Return the engine's display name.
    fn name(&self) -> &str;
}
