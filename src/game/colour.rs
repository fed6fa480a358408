use super::board::Cell;

/// A player's marble colour. The two-player express game pairs Blue
/// against Orange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Blue,
    Orange,
}

impl Colour {
    /// Both colours, in the order used for deterministic iteration.
    pub const ALL: [Colour; 2] = [Colour::Blue, Colour::Orange];

    /// Get the other colour
    pub fn other(self) -> Colour {
        match self {
            Colour::Blue => Colour::Orange,
            Colour::Orange => Colour::Blue,
        }
    }

    /// Convert colour to cell content
    pub fn cell(self) -> Cell {
        match self {
            Colour::Blue => Cell::Blue,
            Colour::Orange => Cell::Orange,
        }
    }

    /// Get colour name for display
    pub fn name(self) -> &'static str {
        match self {
            Colour::Blue => "Blue",
            Colour::Orange => "Orange",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
