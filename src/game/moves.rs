use std::fmt;

/// A single move: origin square, destination square, and an optional
/// promotion tag for moves that transform the moved piece on arrival.
///
/// The square and promotion types come from the game. Two moves are equal
/// only if all three fields match, so a promoting and a non-promoting move
/// between the same squares are distinct moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move<S, P> {
    pub from: S,
    pub to: S,
    pub promotion: Option<P>,
}

impl<S, P> Move<S, P> {
    pub fn new(from: S, to: S) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promoting(from: S, to: S, promotion: P) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl<S: fmt::Display, P: fmt::Display> fmt::Display for Move<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.promotion {
            Some(promotion) => write!(f, "{}{}={}", self.from, self.to, promotion),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}

/// Canonical encoding of a move, produced by the game's `move_key`.
///
/// Keys index move-tree nodes. Within the legal moves of any single
/// position they are collision-free; across positions they may repeat.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MoveKey(String);

impl MoveKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MoveKey {
    fn from(key: String) -> Self {
        MoveKey(key)
    }
}

impl From<&str> for MoveKey {
    fn from(key: &str) -> Self {
        MoveKey(key.to_string())
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
