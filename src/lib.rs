//! Adversarial search over abstract two-player zero-sum games.
//!
//! Implement [`game::Game`] for your rules, then search positions with
//! [`search::minimax`], [`search::alpha_beta`], or [`search::stochastic`].
//! Every search reports the value and principal path of the line it chose
//! plus a [`move_tree::MoveTree`] recording exactly which moves it
//! explored.

pub mod game;
pub mod move_tree;
pub mod prelude;
pub mod search;
