use super::*;
use crate::game::Move;

/// Whoever sits across from the ensemble.
/// Implementations can be a human at a terminal, a scripted bot, or any
/// predictor playing for the other side.
///
/// The Room never shows the opponent the ensemble's move before the
/// opponent commits, so choosing first is fair.
pub trait Opponent {
    fn name(&self) -> String;

    /// Commit to this round's move. `None` ends the match.
    fn choose(&mut self) -> anyhow::Result<Option<Move>>;

    /// Receive the resolved round and the running tally.
    /// Useful for UI or for learning; not required for choosing.
    fn notify(&mut self, _: &Round, _: &Tally) {}
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn name(&self) -> String {
        (**self).name()
    }
    fn choose(&mut self) -> anyhow::Result<Option<Move>> {
        (**self).choose()
    }
    fn notify(&mut self, round: &Round, tally: &Tally) {
        (**self).notify(round, tally)
    }
}
