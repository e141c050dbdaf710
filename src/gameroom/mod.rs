//! Match orchestration: the room, its rounds, and the running tally.
mod opponent;
mod room;
mod round;
mod summary;
mod tally;

pub use opponent::*;
pub use room::*;
pub use round::*;
pub use summary::*;
pub use tally::*;
