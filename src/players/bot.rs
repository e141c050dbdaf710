use crate::game::Move;
use crate::gameroom::*;
use crate::predictors::Predictor;

/// Puts any predictor in the opponent's seat.
///
/// The bot learns from its own side of the table: its own move is the
/// round's `player` move and its opponent is the ensemble.
#[derive(Debug)]
pub struct Bot<P: Predictor>(P);

impl<P: Predictor> From<P> for Bot<P> {
    fn from(predictor: P) -> Self {
        Self(predictor)
    }
}

impl<P: Predictor> Bot<P> {
    pub fn predictor(&self) -> &P {
        &self.0
    }
}

impl<P: Predictor> Opponent for Bot<P> {
    fn name(&self) -> String {
        format!("{} bot", self.0.name())
    }
    fn choose(&mut self) -> anyhow::Result<Option<Move>> {
        Ok(Some(self.0.get_move()))
    }
    fn notify(&mut self, round: &Round, _: &Tally) {
        self.0.record(round.player, round.cpu);
    }
}
