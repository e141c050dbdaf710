//! Opponent implementations for the game room.
//!
//! Concrete types implementing the [`Opponent`] trait from [`crate::gameroom`],
//! providing different ways to challenge the ensemble.
//!
//! ## Implementations
//!
//! - [`Fish`] — Uniform random player for testing and simulation
//! - [`Pattern`] — Scripted player cycling a fixed sequence
//! - [`Bot`] — Any [`Predictor`] playing from the other side
//! - [`Human`] — Interactive player at the terminal (requires `cli` feature)
//!
//! [`Opponent`]: crate::gameroom::Opponent
//! [`Predictor`]: crate::predictors::Predictor
mod bot;
mod fish;
#[cfg(feature = "cli")]
mod human;
mod pattern;

pub use bot::*;
pub use fish::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use pattern::*;
