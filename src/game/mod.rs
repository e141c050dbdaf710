//! Move symbols and the cyclic dominance rule between them.
mod moves;
mod outcome;

pub use moves::*;
pub use outcome::*;
