use criterion::{criterion_group, criterion_main, Criterion};

use gametree::game::{Evaluation, Game, Move, MoveKey, Side, Successor};
use gametree::search::{alpha_beta, minimax, stochastic, ThreadLocalChooser};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax depth 6", |b| b.iter(minimax_full_tree));
    c.bench_function("alpha beta depth 6", |b| b.iter(alpha_beta_pruned_tree));
    c.bench_function("stochastic 64 rollouts", |b| b.iter(stochastic_rollouts));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Subtraction game sized to give the searches a real tree: take one to
/// five objects, taking the last one wins.
#[derive(Clone, Copy)]
struct Pile {
    objects: u8,
    to_move: Side,
}

struct TakeFive;

impl Game for TakeFive {
    type Square = u8;
    type Promotion = u8;
    type State = Pile;
    type Flags = ();

    fn legal_moves(&self, _side: Side, state: &Pile, _flags: &()) -> Vec<Move<u8, u8>> {
        (1..=state.objects.min(5))
            .map(|take| Move::new(state.objects, state.objects - take))
            .collect()
    }

    fn apply_move(&self, side: Side, state: &Pile, mv: &Move<u8, u8>, _flags: &()) -> Successor<Self> {
        Successor {
            side: side.flip(),
            state: Pile {
                objects: mv.to,
                to_move: state.to_move.flip(),
            },
            flags: (),
        }
    }

    fn evaluate(&self, state: &Pile) -> Evaluation {
        let score = if state.objects == 0 {
            1000.0
        } else if state.objects % 6 == 0 {
            100.0
        } else {
            -100.0
        };
        match state.to_move {
            Side::Max => -score,
            Side::Min => score,
        }
    }

    fn move_key(&self, mv: &Move<u8, u8>) -> MoveKey {
        MoveKey::from(format!("{}-{}", mv.from, mv.to))
    }
}

fn start() -> Pile {
    Pile {
        objects: 40,
        to_move: Side::Max,
    }
}

fn minimax_full_tree() {
    let result = minimax(&TakeFive, Side::Max, &start(), &(), 6);
    assert!(result.best_move().is_some());
}

fn alpha_beta_pruned_tree() {
    let result = alpha_beta(&TakeFive, Side::Max, &start(), &(), 6);
    assert!(result.best_move().is_some());
}

fn stochastic_rollouts() {
    let result = stochastic(&TakeFive, Side::Max, &start(), &(), 6, 64, &mut ThreadLocalChooser)
        .expect("the pile is deep enough for every rollout");
    assert!(result.best_move().is_some());
}
