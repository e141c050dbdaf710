use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Uniform baseline. Any strategy that cannot outscore this one is noise.
#[derive(Debug)]
pub struct Random {
    score: Score,
    rng: SmallRng,
}

impl From<SmallRng> for Random {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            rng,
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for Random {
    fn name(&self) -> &'static str {
        "Random"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        Move::roll(&mut self.rng)
    }
    fn observe(&mut self, _: Move, _: Move) {}
}
