use super::Score;
use crate::game::Move;
use crate::game::Outcome;

/// A stateful strategy that guesses a move to throw next round and keeps
/// a decaying tally of how well its guesses would have done.
///
/// Score bookkeeping is uniform: [`Predictor::record`] updates the score
/// from `Outcome::of(own, opponent)` and only then hands the round to
/// [`Predictor::observe`] for variant-specific learning. Implementors
/// override `observe`, never `record`.
pub trait Predictor: Send {
    /// Stable label for diagnostics.
    fn name(&self) -> &'static str;
    fn score(&self) -> &Score;
    fn score_mut(&mut self) -> &mut Score;

    /// The move to throw this round.
    /// Must always succeed, including before any observation.
    fn get_move(&mut self) -> Move;

    /// Update strategy state from a completed round.
    fn observe(&mut self, own: Move, opponent: Move);

    /// Score the round, then learn from it.
    fn record(&mut self, own: Move, opponent: Move) {
        self.score_mut().update(Outcome::of(own, opponent));
        self.observe(own, opponent);
    }
}

impl<P> Predictor for Box<P>
where
    P: Predictor + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn score(&self) -> &Score {
        (**self).score()
    }
    fn score_mut(&mut self) -> &mut Score {
        (**self).score_mut()
    }
    fn get_move(&mut self) -> Move {
        (**self).get_move()
    }
    fn observe(&mut self, own: Move, opponent: Move) {
        (**self).observe(own, opponent)
    }
    fn record(&mut self, own: Move, opponent: Move) {
        (**self).record(own, opponent)
    }
}
