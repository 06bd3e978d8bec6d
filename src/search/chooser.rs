//! Pluggable move selection for the randomized searches.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks one element of a candidate slice.
///
/// The randomized searches delegate every sampling decision to a chooser,
/// so swapping in a deterministic implementation makes them fully
/// reproducible. Implementations must return `Some` whenever `candidates`
/// is non-empty.
pub trait Chooser {
    fn choose<'a, M>(&mut self, candidates: &'a [M]) -> Option<&'a M>;
}

/// Always picks the first candidate. Rollouts become deterministic, which
/// is what tests want.
#[derive(Clone, Copy, Default, Debug)]
pub struct FirstCandidateChooser;

impl Chooser for FirstCandidateChooser {
    fn choose<'a, M>(&mut self, candidates: &'a [M]) -> Option<&'a M> {
        candidates.first()
    }
}

/// Picks uniformly through a caller-supplied RNG.
#[derive(Clone, Debug)]
pub struct RandomChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChooser<StdRng> {
    /// Reproducible chooser: the same seed yields the same rollouts.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn choose<'a, M>(&mut self, candidates: &'a [M]) -> Option<&'a M> {
        candidates.choose(&mut self.rng)
    }
}

/// Picks uniformly through the calling thread's generator. Stateless and
/// `Copy`, so it works unchanged with the parallel stochastic search.
#[derive(Clone, Copy, Default, Debug)]
pub struct ThreadLocalChooser;

impl Chooser for ThreadLocalChooser {
    fn choose<'a, M>(&mut self, candidates: &'a [M]) -> Option<&'a M> {
        if candidates.is_empty() {
            None
        } else {
            Some(&candidates[fastrand::usize(..candidates.len())])
        }
    }
}
