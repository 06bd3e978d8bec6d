//! Common types re-exported for convenience.

pub use crate::game::{Evaluation, Game, GameMove, Move, MoveKey, Side, Successor};
pub use crate::move_tree::MoveTree;
pub use crate::search::{
    alpha_beta, minimax, random_move, stochastic, stochastic_parallel, Chooser,
    FirstCandidateChooser, RandomChooser, SearchError, SearchResult, ThreadLocalChooser,
};
