//! The trait a game implements to be searchable.

use std::fmt::Debug;

use super::moves::{Move, MoveKey};
use super::side::Side;

/// Numeric evaluation of a state. Higher favors [`Side::Max`].
pub type Evaluation = f64;

/// Shorthand for the move type of a game `G`.
pub type GameMove<G> = Move<<G as Game>::Square, <G as Game>::Promotion>;

/// The position produced by applying a move: the next side to move, the
/// new state, and the new flags.
pub struct Successor<G: Game + ?Sized> {
    pub side: Side,
    pub state: G::State,
    pub flags: G::Flags,
}

/// A two-player zero-sum alternating-move game.
///
/// This is the only boundary the searches know about. The game owns its
/// own rules; the searches only generate moves, apply them, score the
/// resulting states, and encode moves into keys for the explored-move
/// tree.
pub trait Game {
    /// Origin/destination identifier for moves.
    type Square: Copy + Eq + Debug;
    /// Tag carried by moves that transform the moved piece.
    type Promotion: Copy + Eq + Debug;
    /// Position data, scored by [`Game::evaluate`].
    type State: Clone;
    /// Auxiliary per-position data threaded through the search unchanged
    /// except by [`Game::apply_move`] (castling rights, repetition
    /// counters, and the like).
    type Flags: Clone;

    /// All legal moves for `side` in this position.
    ///
    /// The returned order is meaningful: the searches explore moves in
    /// exactly this order and resolve equal-valued moves in favor of
    /// earlier ones. An empty list means `side` has no move here.
    fn legal_moves(
        &self,
        side: Side,
        state: &Self::State,
        flags: &Self::Flags,
    ) -> Vec<Move<Self::Square, Self::Promotion>>;

    /// Applies `mv` for `side` and returns the resulting position.
    ///
    /// Must be pure: the inputs are borrowed immutably and the successor
    /// is a fresh value, so concurrent callers and sibling branches never
    /// observe each other's moves. The successor's `side` is authoritative
    /// for the next ply.
    fn apply_move(
        &self,
        side: Side,
        state: &Self::State,
        mv: &Move<Self::Square, Self::Promotion>,
        flags: &Self::Flags,
    ) -> Successor<Self>;

    /// Scores a state. Higher favors [`Side::Max`].
    fn evaluate(&self, state: &Self::State) -> Evaluation;

    /// Canonical key for `mv`, used to index explored-move trees. Must be
    /// injective over the legal moves of any single position.
    fn move_key(&self, mv: &Move<Self::Square, Self::Promotion>) -> MoveKey;
}
