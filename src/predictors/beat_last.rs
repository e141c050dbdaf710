use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Assumes the opponent repeats and throws whatever beats their last move.
#[derive(Debug)]
pub struct BeatLastMove {
    score: Score,
    last: Option<Move>,
    rng: SmallRng,
}

impl From<SmallRng> for BeatLastMove {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            last: None,
            rng,
        }
    }
}

impl Default for BeatLastMove {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for BeatLastMove {
    fn name(&self) -> &'static str {
        "Beat Last Move"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match self.last {
            Some(last) => last.beater(),
            None => Move::roll(&mut self.rng),
        }
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.last = Some(opponent);
    }
}
