//! Fixed-depth adversarial search over an abstract [`Game`].
//!
//! Four strategies share one result shape:
//!
//! - [`minimax`] explores every line to the target depth.
//! - [`alpha_beta`] returns exactly what minimax returns while skipping
//!   moves that provably cannot change the outcome.
//! - [`stochastic`] (and [`stochastic_parallel`]) estimates each first
//!   move by averaging random rollouts instead of expanding the tree.
//! - [`random_move`] plays one chooser-picked move; the baseline.
//!
//! Every search reports the value of the line it chose, the line itself in
//! play order, and a [`MoveTree`] recording each move it explored.
//!
//! [`Game`]: crate::game::Game

mod alpha_beta;
mod chooser;
mod minimax;
mod random;
mod stochastic;


pub use alpha_beta::alpha_beta;
pub use chooser::{Chooser, FirstCandidateChooser, RandomChooser, ThreadLocalChooser};
pub use minimax::minimax;
pub use random::random_move;
pub use stochastic::{stochastic, stochastic_parallel};

use thiserror::Error;

use crate::game::{Evaluation, Side};
use crate::move_tree::MoveTree;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("breadth must be at least 1")]
    BreadthTooLow,
    #[error("rollout ran out of legal moves before reaching the target depth")]
    RolloutDeadEnd,
}

/// Outcome of a search: the value of the chosen line, the line itself, and
/// the tree of every explored move.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// Evaluation of the chosen line.
    pub value: Evaluation,
    /// The chosen line in play order, starting with the move to play.
    /// Empty when the searched position has no legal moves or the depth
    /// is zero.
    pub path: Vec<M>,
    /// Every move explored while searching, keyed by canonical encoding.
    pub tree: MoveTree,
}

impl<M> SearchResult<M> {
    /// Result for a position searched without expanding any move: the
    /// state's own evaluation, no path, no explored moves.
    pub fn leaf(value: Evaluation) -> Self {
        Self {
            value,
            path: Vec::new(),
            tree: MoveTree::new(),
        }
    }

    /// The move to play, if the search found one.
    pub fn best_move(&self) -> Option<&M> {
        self.path.first()
    }
}

/// Running best candidate while scanning a node's moves.
///
/// The first offer always installs itself; later offers replace it only on
/// strict improvement for `side`, so earlier-generated moves win ties.
pub(crate) struct BestLine<M> {
    chosen: Option<M>,
    value: Evaluation,
    path: Vec<M>,
}

impl<M> BestLine<M> {
    pub(crate) fn new() -> Self {
        Self {
            chosen: None,
            value: 0.0,
            path: Vec::new(),
        }
    }

    pub(crate) fn offer(&mut self, candidate: M, value: Evaluation, path: Vec<M>, side: Side) {
        let improved = match self.chosen {
            None => true,
            Some(_) => {
                if side.is_max() {
                    value > self.value
                } else {
                    value < self.value
                }
            }
        };
        if improved {
            self.chosen = Some(candidate);
            self.value = value;
            self.path = path;
        }
    }

    /// Value of the current best. Meaningless before the first offer.
    pub(crate) fn value(&self) -> Evaluation {
        self.value
    }

    /// The chosen move prepended to its continuation.
    pub(crate) fn into_line(self) -> (Evaluation, Vec<M>) {
        let mut path = self.path;
        if let Some(chosen) = self.chosen {
            path.insert(0, chosen);
        }
        (self.value, path)
    }
}
