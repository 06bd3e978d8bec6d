//! Exhaustive minimax search.

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{BestLine, SearchResult};
use crate::game::{Game, GameMove, Side};
use crate::move_tree::MoveTree;

/// Searches every line to `depth` plies and returns the best one.
///
/// A position at depth 0 is worth its evaluation; deeper positions are
/// worth the maximum or minimum over their legal replies, following the
/// side to move. Moves are explored in generation order and equal values
/// resolve to the earlier move. A position with no legal moves evaluates
/// like a leaf, with an empty path.
///
/// No pruning happens here, so the returned tree is the complete game
/// tree to `depth`. The pruned search is required to agree with this
/// function move for move; anything it skips, it skips safely.
///
/// # Example
///
/// ```
/// use gametree::game::{Evaluation, Game, Move, MoveKey, Side, Successor};
/// use gametree::search::minimax;
///
/// // Two moves from the start: "a" reaches 5.0, "b" reaches 3.0.
/// struct TwoChoices;
///
/// impl Game for TwoChoices {
///     type Square = char;
///     type Promotion = char;
///     type State = Evaluation;
///     type Flags = ();
///
///     fn legal_moves(&self, _side: Side, state: &Evaluation, _flags: &()) -> Vec<Move<char, char>> {
///         if *state == 0.0 {
///             vec![Move::new('a', 'a'), Move::new('b', 'b')]
///         } else {
///             Vec::new()
///         }
///     }
///
///     fn apply_move(&self, side: Side, _state: &Evaluation, mv: &Move<char, char>, _flags: &()) -> Successor<Self> {
///         Successor {
///             side: side.flip(),
///             state: if mv.from == 'a' { 5.0 } else { 3.0 },
///             flags: (),
///         }
///     }
///
///     fn evaluate(&self, state: &Evaluation) -> Evaluation {
///         *state
///     }
///
///     fn move_key(&self, mv: &Move<char, char>) -> MoveKey {
///         MoveKey::from(mv.to_string())
///     }
/// }
///
/// let result = minimax(&TwoChoices, Side::Max, &0.0, &(), 1);
/// assert_eq!(result.value, 5.0);
/// assert_eq!(result.best_move(), Some(&Move::new('a', 'a')));
/// ```
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax<G: Game>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
) -> SearchResult<GameMove<G>> {
    debug!("minimax search: side={} depth={}", side, depth);
    search(game, side, state, flags, depth)
}

fn search<G: Game>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
) -> SearchResult<GameMove<G>> {
    if depth == 0 {
        return SearchResult::leaf(game.evaluate(state));
    }

    let candidates = game.legal_moves(side, state, flags);
    if candidates.is_empty() {
        return SearchResult::leaf(game.evaluate(state));
    }

    let mut tree = MoveTree::new();
    let mut best = BestLine::new();

    for candidate in candidates {
        let next = game.apply_move(side, state, &candidate, flags);
        let SearchResult {
            value,
            path,
            tree: subtree,
        } = search(game, next.side, &next.state, &next.flags, depth - 1);

        tree.insert(game.move_key(&candidate), subtree);
        best.offer(candidate, value, path, side);
    }

    let (value, path) = best.into_line();
    SearchResult { value, path, tree }
}
