use super::*;
use crate::ensemble::Arbitrator;
use crate::predictors::Predictor;

/// Match driver between the ensemble and one opponent.
///
/// Each step runs a full round in order: the opponent commits, the ensemble
/// picks a delegate and throws, the outcome is scored, and the ensemble
/// records the round exactly once before the opponent is notified.
/// The win/loss/tie tally lives here and never inside the ensemble.
#[derive(Debug)]
pub struct Room<O: Opponent> {
    ai: Arbitrator,
    opponent: O,
    tally: Tally,
}

impl<O: Opponent> Room<O> {
    pub fn new(ai: Arbitrator, opponent: O) -> Self {
        Self {
            ai,
            opponent,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn arbitrator(&self) -> &Arbitrator {
        &self.ai
    }
    pub fn opponent(&self) -> &O {
        &self.opponent
    }
    pub fn summary(&self) -> Summary {
        Summary::from((self.opponent.name(), &self.tally, &self.ai))
    }

    /// Play one round. `Ok(None)` once the opponent walks away.
    pub fn step(&mut self) -> anyhow::Result<Option<Round>> {
        let Some(player) = self.opponent.choose()? else {
            return Ok(None);
        };
        let cpu = self.ai.get_move();
        let strategy = self.ai.selected().map(|p| p.name()).unwrap_or("Random");
        self.ai.record(cpu, player);
        let round = Round {
            number: self.tally.rounds() + 1,
            player,
            cpu,
            strategy,
        };
        self.tally.add(round.outcome());
        log::debug!("{}", round);
        self.opponent.notify(&round, &self.tally);
        Ok(Some(round))
    }

    /// Play until the opponent quits or `limit` rounds have been played.
    pub fn run(&mut self, limit: Option<usize>) -> anyhow::Result<Summary> {
        log::info!("{} vs {}", self.ai.name(), self.opponent.name());
        while limit.map_or(true, |n| self.tally.rounds() < n) {
            if self.step()?.is_none() {
                log::info!("{} left the table", self.opponent.name());
                break;
            }
        }
        log::info!("{}", self.tally);
        Ok(self.summary())
    }
}
