//! The abstract game interface the searches consume.

pub mod moves;
pub mod side;
pub mod traits;

pub use moves::{Move, MoveKey};
pub use side::Side;
pub use traits::{Evaluation, Game, GameMove, Successor};
