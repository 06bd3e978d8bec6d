//! Single-move baseline: pick one legal move and report where it leads.

use log::debug;

use super::{Chooser, SearchResult};
use crate::game::{Game, GameMove, Side};
use crate::move_tree::MoveTree;

/// Plays one chooser-picked move and returns the evaluation of the
/// position it reaches.
///
/// The weakest strategy in the family, kept as a sparring partner and as
/// a sanity baseline for the real searches. The result has the usual
/// shape: a one-move path and a tree containing just that move. With no
/// legal moves the current state's evaluation is returned with an empty
/// path.
pub fn random_move<G, C>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    chooser: &mut C,
) -> SearchResult<GameMove<G>>
where
    G: Game,
    C: Chooser,
{
    debug!("random move: side={}", side);
    let candidates = game.legal_moves(side, state, flags);
    let picked = match chooser.choose(&candidates) {
        Some(picked) => *picked,
        None => return SearchResult::leaf(game.evaluate(state)),
    };

    let next = game.apply_move(side, state, &picked, flags);
    let mut tree = MoveTree::new();
    tree.insert(game.move_key(&picked), MoveTree::new());

    SearchResult {
        value: game.evaluate(&next.state),
        path: vec![picked],
        tree,
    }
}
