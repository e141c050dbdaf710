use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Extrapolates the opponent's last rotation.
///
/// If the opponent went Rock -> Paper, they stepped forward by one and
/// are expected to step forward again to Scissors; a repeat is a rotation
/// of zero. Needs two observations; with one it degrades to beating the
/// last move.
#[derive(Debug)]
pub struct AntiRotation {
    score: Score,
    prior: Option<Move>,
    last: Option<Move>,
    rng: SmallRng,
}

impl From<SmallRng> for AntiRotation {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            prior: None,
            last: None,
            rng,
        }
    }
}

impl Default for AntiRotation {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for AntiRotation {
    fn name(&self) -> &'static str {
        "Anti-Rotation"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match (self.prior, self.last) {
            (Some(prior), Some(last)) => last.shift(last.delta(prior)).beater(),
            (None, Some(last)) => last.beater(),
            (_, None) => Move::roll(&mut self.rng),
        }
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.prior = self.last;
        self.last = Some(opponent);
    }
}
