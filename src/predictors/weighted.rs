use super::*;
use crate::game::Move;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;
use rand::rngs::SmallRng;

/// Throws a move sampled in proportion to the opponent's decayed move
/// frequencies. A stochastic mirror of the opponent's habits rather than
/// an argmax counter.
#[derive(Debug)]
pub struct WeightedFrequentist {
    score: Score,
    moves: Frequency,
    rng: SmallRng,
}

impl From<SmallRng> for WeightedFrequentist {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            moves: Frequency::default(),
            rng,
        }
    }
}

impl Default for WeightedFrequentist {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl WeightedFrequentist {
    /// Uniform fallback when the weights cannot form a distribution,
    /// e.g. before the first observation.
    fn sample(&mut self) -> Move {
        match WeightedIndex::new(self.moves.weights()) {
            Ok(dist) => Move::from(dist.sample(&mut self.rng) as u8),
            Err(e) => {
                if !self.moves.is_empty() {
                    log::warn!("degenerate move weights {:?}: {}", self.moves.weights(), e);
                }
                Move::roll(&mut self.rng)
            }
        }
    }
}

impl Predictor for WeightedFrequentist {
    fn name(&self) -> &'static str {
        "Weighted Frequentist"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        self.sample()
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        self.moves.observe(opponent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_observed_move_is_certain() {
        let mut p = WeightedFrequentist::default();
        p.record(Move::Rock, Move::Scissors);
        assert!((0..64).all(|_| p.get_move() == Move::Scissors));
    }

    #[test]
    fn never_samples_unseen_moves() {
        let mut p = WeightedFrequentist::from(SmallRng::seed_from_u64(11));
        p.record(Move::Rock, Move::Rock);
        p.record(Move::Rock, Move::Paper);
        let draws = (0..256).map(|_| p.get_move()).collect::<Vec<_>>();
        assert!(draws.iter().all(|m| *m != Move::Scissors));
        assert!(draws.iter().any(|m| *m == Move::Rock));
        assert!(draws.iter().any(|m| *m == Move::Paper));
    }

    #[test]
    fn cold_start_is_uniform() {
        let mut p = WeightedFrequentist::from(SmallRng::seed_from_u64(5));
        let mut seen = [false; 3];
        (0..128).for_each(|_| seen[usize::from(p.get_move())] = true);
        assert!(seen.iter().all(|&s| s));
    }
}
