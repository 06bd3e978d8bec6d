use std::fmt;

/// The player to move. `Max` prefers higher evaluations, `Min` lower ones.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    /// The other player.
    pub fn flip(&self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    pub fn is_max(&self) -> bool {
        matches!(self, Side::Max)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Max => "max",
            Side::Min => "min",
        };
        write!(f, "{}", side_str)
    }
}
