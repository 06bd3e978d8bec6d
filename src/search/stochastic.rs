//! Rollout-based stochastic search.
//!
//! Instead of expanding the game tree, each legal first move is estimated
//! by playing `breadth` random continuations ("rollouts") to a fixed total
//! ply count and averaging the evaluations of the positions they reach.
//! The chooser supplies every random decision, so rollouts are as random
//! or as deterministic as the chooser plugged in.
//!
//! The first move with the lowest mean is chosen, whichever side is to
//! move; ties keep the earliest-generated move.

use log::debug;
use rayon::prelude::*;
use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{Chooser, SearchError, SearchResult};
use crate::game::{Evaluation, Game, GameMove, MoveKey, Side, Successor};
use crate::move_tree::MoveTree;

/// Continuations are short (at most `depth - 1` moves), so they live
/// inline until a rollout is promoted into the result path.
type Continuation<M> = SmallVec<[M; 16]>;

/// One rollout's outcome: the continuation played after the first move and
/// the evaluation of the final position.
struct Rollout<M> {
    continuation: Continuation<M>,
    leaf_value: Evaluation,
}

/// Estimates every legal first move by sampled rollouts and plays the one
/// with the lowest mean evaluation.
///
/// Each rollout applies the first move, then `depth - 1` chooser-picked
/// moves, for exactly `depth` plies in total, and scores the final
/// position. A first move's estimate is the arithmetic mean of its
/// `breadth` rollout scores. The returned path is the chosen first move
/// followed by the continuation of its most recent rollout, so its length
/// is always exactly `depth`; the tree records the same single
/// representative continuation per first move as a chain of single-child
/// nodes, not all `breadth` rollouts.
///
/// # Errors
///
/// - [`SearchError::DepthTooLow`] when `depth` is zero.
/// - [`SearchError::BreadthTooLow`] when `breadth` is zero.
/// - [`SearchError::NoAvailableMoves`] when the position has no legal
///   first move.
/// - [`SearchError::RolloutDeadEnd`] when a rollout runs out of legal
///   moves before reaching `depth` plies.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn stochastic<G, C>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
    breadth: usize,
    chooser: &mut C,
) -> Result<SearchResult<GameMove<G>>, SearchError>
where
    G: Game,
    C: Chooser,
{
    debug!(
        "stochastic search: side={} depth={} breadth={}",
        side, depth, breadth
    );
    validate(depth, breadth)?;

    let candidates = game.legal_moves(side, state, flags);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mut selection = Selection::new();
    for candidate in candidates {
        let start = game.apply_move(side, state, &candidate, flags);
        let (mean, representative) = sample_sequential(game, &start, depth, breadth, chooser)?;
        let chain = MoveTree::line(representative.continuation.iter().map(|mv| game.move_key(mv)));
        selection.record(
            candidate,
            game.move_key(&candidate),
            chain,
            mean,
            representative.continuation,
        );
    }
    Ok(selection.into_result())
}

/// [`stochastic`] with the rollouts of each first move fanned out on the
/// rayon thread pool.
///
/// Every rollout clones the chooser and works on its own copy of the
/// post-first-move position; the per-move results are reduced in rollout
/// order, so "most recent rollout" stays well defined. A stateless chooser
/// like [`ThreadLocalChooser`] samples here exactly as it would
/// sequentially, and [`FirstCandidateChooser`] produces results identical
/// to [`stochastic`]. A chooser whose clones replay one RNG state would
/// make all rollouts of a first move identical, which defeats the
/// sampling; keep seeded choosers on the sequential entry point.
///
/// [`ThreadLocalChooser`]: super::ThreadLocalChooser
/// [`FirstCandidateChooser`]: super::FirstCandidateChooser
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn stochastic_parallel<G, C>(
    game: &G,
    side: Side,
    state: &G::State,
    flags: &G::Flags,
    depth: u8,
    breadth: usize,
    chooser: &C,
) -> Result<SearchResult<GameMove<G>>, SearchError>
where
    G: Game + Sync,
    G::State: Sync,
    G::Flags: Sync,
    G::Square: Send + Sync,
    G::Promotion: Send + Sync,
    C: Chooser + Clone + Sync,
{
    debug!(
        "parallel stochastic search: side={} depth={} breadth={}",
        side, depth, breadth
    );
    validate(depth, breadth)?;

    let candidates = game.legal_moves(side, state, flags);
    if candidates.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mut selection = Selection::new();
    for candidate in candidates {
        let start = game.apply_move(side, state, &candidate, flags);
        let (mean, representative) = sample_parallel(game, &start, depth, breadth, chooser)?;
        let chain = MoveTree::line(representative.continuation.iter().map(|mv| game.move_key(mv)));
        selection.record(
            candidate,
            game.move_key(&candidate),
            chain,
            mean,
            representative.continuation,
        );
    }
    Ok(selection.into_result())
}

fn validate(depth: u8, breadth: usize) -> Result<(), SearchError> {
    if depth < 1 {
        return Err(SearchError::DepthTooLow);
    }
    if breadth < 1 {
        return Err(SearchError::BreadthTooLow);
    }
    Ok(())
}

/// Runs `breadth` rollouts from the position after a first move and
/// reduces them to (mean evaluation, most recent rollout).
fn sample_sequential<G, C>(
    game: &G,
    start: &Successor<G>,
    depth: u8,
    breadth: usize,
    chooser: &mut C,
) -> Result<(Evaluation, Rollout<GameMove<G>>), SearchError>
where
    G: Game,
    C: Chooser,
{
    let mut total = 0.0;
    let mut last = None;
    for _ in 0..breadth {
        let rollout = run_rollout(game, start, depth, chooser)?;
        total += rollout.leaf_value;
        last = Some(rollout);
    }
    let representative = last.expect("breadth is validated to be at least 1");
    Ok((total / breadth as f64, representative))
}

fn sample_parallel<G, C>(
    game: &G,
    start: &Successor<G>,
    depth: u8,
    breadth: usize,
    chooser: &C,
) -> Result<(Evaluation, Rollout<GameMove<G>>), SearchError>
where
    G: Game + Sync,
    G::State: Sync,
    G::Flags: Sync,
    G::Square: Send + Sync,
    G::Promotion: Send + Sync,
    C: Chooser + Clone + Sync,
{
    let mut rollouts = (0..breadth)
        .into_par_iter()
        .map(|_| {
            let mut chooser = chooser.clone();
            run_rollout(game, start, depth, &mut chooser)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total: Evaluation = rollouts.iter().map(|rollout| rollout.leaf_value).sum();
    let representative = rollouts.pop().expect("breadth is validated to be at least 1");
    Ok((total / breadth as f64, representative))
}

/// Plays chooser-picked moves from `start` (one ply already played) until
/// `depth` total plies, then evaluates the final position.
fn run_rollout<G, C>(
    game: &G,
    start: &Successor<G>,
    depth: u8,
    chooser: &mut C,
) -> Result<Rollout<GameMove<G>>, SearchError>
where
    G: Game,
    C: Chooser,
{
    let mut side = start.side;
    let mut state = start.state.clone();
    let mut flags = start.flags.clone();
    let mut continuation = Continuation::new();

    for _ply in 1..depth {
        let candidates = game.legal_moves(side, &state, &flags);
        let picked = match chooser.choose(&candidates) {
            Some(picked) => *picked,
            None => return Err(SearchError::RolloutDeadEnd),
        };
        let next = game.apply_move(side, &state, &picked, &flags);
        continuation.push(picked);
        side = next.side;
        state = next.state;
        flags = next.flags;
    }

    Ok(Rollout {
        continuation,
        leaf_value: game.evaluate(&state),
    })
}

/// Accumulates per-first-move estimates and tracks the lowest mean seen,
/// keeping the earliest first move on ties.
struct Selection<M> {
    tree: MoveTree,
    best: Option<(Evaluation, Vec<M>)>,
}

impl<M> Selection<M> {
    fn new() -> Self {
        Self {
            tree: MoveTree::new(),
            best: None,
        }
    }

    fn record(
        &mut self,
        first_move: M,
        first_key: MoveKey,
        chain: MoveTree,
        mean: Evaluation,
        continuation: Continuation<M>,
    ) {
        self.tree.insert(first_key, chain);

        let lowest = match &self.best {
            None => true,
            Some((best_mean, _)) => mean < *best_mean,
        };
        if lowest {
            let mut path = Vec::with_capacity(continuation.len() + 1);
            path.push(first_move);
            path.extend(continuation);
            self.best = Some((mean, path));
        }
    }

    fn into_result(self) -> SearchResult<M> {
        let (value, path) = self.best.expect("at least one first move was sampled");
        SearchResult {
            value,
            path,
            tree: self.tree,
        }
    }
}
