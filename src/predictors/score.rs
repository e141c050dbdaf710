use crate::DECAY;
use crate::Utility;
use crate::game::Outcome;

/// Exponentially decayed running reward.
///
/// Each observation multiplies the value by [`DECAY`] and then adds the
/// round's reward, so the score approximates a recency-weighted win rate
/// bounded by `±1 / (1 - DECAY)`. `rounds` counts observations and is never
/// decayed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Score {
    value: Utility,
    rounds: usize,
}

impl Score {
    pub fn value(&self) -> Utility {
        self.value
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    /// Decay, then accumulate.
    pub fn update(&mut self, outcome: Outcome) {
        self.value = self.value * DECAY + outcome.reward();
        self.rounds += 1;
    }
}

/// Force a value, keeping the observation count at zero.
impl From<Utility> for Score {
    fn from(value: Utility) -> Self {
        Self { value, rounds: 0 }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>+8.3}", self.value)
    }
}
