//! Alpha-beta search: minimax with a pruning window.
//!
//! The window `[alpha, beta]` tracks the range of values that can still
//! influence the final decision: `alpha` is the best value the maximizer
//! has secured elsewhere, `beta` the minimizer's counterpart. As soon as a
//! node's running best falls outside the window, its remaining sibling
//! moves cannot matter to any ancestor and are skipped. The window only
//! ever narrows on the way down, so everything skipped here is something
//! minimax would have explored to no effect.

use log::{debug, trace};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{BestLine, SearchResult};
use crate::game::{Evaluation, Game, GameMove, Side};
use crate::move_tree::MoveTree;

/// Searches to `depth` plies, skipping moves that provably cannot change
/// the outcome.
///
/// Returns exactly what [`minimax`] returns for the same inputs - same
/// value, same path, same tie-breaking toward earlier moves - while
/// exploring at most as many moves. The move that proves a branch
/// irrelevant is itself recorded in the returned tree; the siblings
/// skipped after it are not, so the tree is a subset of minimax's.
///
/// [`minimax`]: super::minimax
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta<G: Game>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
) -> SearchResult<GameMove<G>> {
    debug!("alpha-beta search: side={} depth={}", side, depth);
    search(
        game,
        side,
        state,
        flags,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
    )
}

fn search<G: Game>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
    mut alpha: Evaluation,
    mut beta: Evaluation,
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
        } = search(
            game,
            next.side,
            &next.state,
            &next.flags,
            depth - 1,
            alpha,
            beta,
        );

        tree.insert(game.move_key(&candidate), subtree);
        best.offer(candidate, value, path, side);

        // The cutoff tests run on the running best, after the explored
        // move is recorded: a cutoff-triggering move appears in the tree,
        // the moves skipped after it do not.
        let running = best.value();
        if side.is_max() {
            if running >= beta {
                trace!("beta cutoff: {} >= {}", running, beta);
                break;
            }
            alpha = alpha.max(running);
        } else {
            if running <= alpha {
                trace!("alpha cutoff: {} <= {}", running, alpha);
                break;
            }
            beta = beta.min(running);
        }
    }

    let (value, path) = best.into_line();
    SearchResult { value, path, tree }
}
