use crate::DECAY;
use crate::N_MOVES;
use crate::Probability;
use crate::Utility;
use crate::game::Move;

/// Decaying per-move counter.
///
/// Every observation decays all buckets by [`DECAY`] and then adds one to the
/// observed move's bucket, same rule as [`super::Score`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Frequency([Utility; N_MOVES]);

impl Frequency {
    pub fn observe(&mut self, m: Move) {
        self.decay();
        self.0[usize::from(m)] += 1.;
    }
    pub fn decay(&mut self) {
        self.0.iter_mut().for_each(|w| *w *= DECAY);
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0.)
    }
    pub fn weight(&self, m: Move) -> Utility {
        self.0[usize::from(m)]
    }
    pub fn weights(&self) -> [Probability; N_MOVES] {
        self.0
    }
    /// Heaviest move. Ties resolve to the lowest index, including the
    /// all-zero table, which yields Rock.
    pub fn mode(&self) -> Move {
        Move::all()
            .into_iter()
            .fold(Move::Rock, |best, m| match self.weight(m) > self.weight(best) {
                true => m,
                false => best,
            })
    }
}

/// Decaying 3x3 table of `previous move -> next move` counts.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Transitions([Frequency; N_MOVES]);

impl Transitions {
    /// Decays every cell, then credits `from -> to`.
    pub fn observe(&mut self, from: Move, to: Move) {
        self.decay();
        self.0[usize::from(from)].0[usize::from(to)] += 1.;
    }
    pub fn decay(&mut self) {
        self.0.iter_mut().for_each(Frequency::decay);
    }
    pub fn row(&self, from: Move) -> &Frequency {
        &self.0[usize::from(from)]
    }
}
