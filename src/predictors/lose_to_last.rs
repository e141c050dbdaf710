use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Throws the move that loses to the opponent's last move. Catches players
/// who expect to be countered and counter the counter.
#[derive(Debug)]
pub struct LoseToLastMove {
    score: Score,
    last: Option<Move>,
    rng: SmallRng,
}

impl From<SmallRng> for LoseToLastMove {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            last: None,
            rng,
        }
    }
}

impl Default for LoseToLastMove {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for LoseToLastMove {
    fn name(&self) -> &'static str {
        "Lose to Last Move"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match self.last {
            Some(last) => last.loser(),
            None => Move::roll(&mut self.rng),
        }
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.last = Some(opponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_move_beaten_by_last() {
        let mut p = LoseToLastMove::default();
        p.record(Move::Paper, Move::Rock);
        assert!(p.get_move() == Move::Scissors);
        p.record(Move::Paper, Move::Scissors);
        assert!(p.get_move() == Move::Paper);
    }
}
