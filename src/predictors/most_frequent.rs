use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Beats the opponent's most frequent recent move.
#[derive(Debug)]
pub struct BeatMostFrequent {
    score: Score,
    moves: Frequency,
    rng: SmallRng,
}

impl From<SmallRng> for BeatMostFrequent {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            moves: Frequency::default(),
            rng,
        }
    }
}

impl Default for BeatMostFrequent {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for BeatMostFrequent {
    fn name(&self) -> &'static str {
        "Beat Most Frequent Move"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match self.moves.is_empty() {
            true => Move::roll(&mut self.rng),
            false => self.moves.mode().beater(),
        }
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.moves.observe(opponent);
    }
}
