//! Move predictors and their shared bookkeeping.
//!
//! ## Implementations
//!
//! - [`Random`] — uniform baseline
//! - [`BeatLastMove`] — assumes the opponent repeats
//! - [`CopyLastMove`] — mirrors the opponent
//! - [`LoseToLastMove`] — counters the counter
//! - [`BeatMostFrequent`] — argmax over decayed move counts
//! - [`AntiRotation`] — extrapolates the last rotation
//! - [`BeatSelfFollowUp`] — argmax over decayed transition counts
//! - [`WeightedFrequentist`] — samples from decayed move counts
//! - [`AntiWinStayLoseShift`] — exploits win-stay / lose-shift
mod beat_last;
mod copy_last;
mod follow_up;
mod frequency;
mod lose_to_last;
mod most_frequent;
mod predictor;
mod random;
mod rotation;
mod score;
mod weighted;
mod win_stay;

pub use beat_last::*;
pub use copy_last::*;
pub use follow_up::*;
pub use frequency::*;
pub use lose_to_last::*;
pub use most_frequent::*;
pub use predictor::*;
pub use random::*;
pub use rotation::*;
pub use score::*;
pub use weighted::*;
pub use win_stay::*;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Fresh generator seeded from the thread-local RNG.
pub fn entropy() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}
