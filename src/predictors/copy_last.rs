use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Mirrors the opponent's last move. Pays off against players who
/// reflexively throw whatever beats what they just played.
#[derive(Debug)]
pub struct CopyLastMove {
    score: Score,
    last: Option<Move>,
    rng: SmallRng,
}

impl From<SmallRng> for CopyLastMove {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            last: None,
            rng,
        }
    }
}

impl Default for CopyLastMove {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for CopyLastMove {
    fn name(&self) -> &'static str {
        "Copy Last Move"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        self.last.unwrap_or_else(|| Move::roll(&mut self.rng))
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.last = Some(opponent);
    }
}
