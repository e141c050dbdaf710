use crate::game::Move;
use crate::game::Outcome;

/// One resolved round, as the driver saw it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Round {
    pub number: usize,
    pub player: Move,
    pub cpu: Move,
    /// Predictor the ensemble delegated to.
    pub strategy: &'static str,
}

impl Round {
    /// From the opponent's perspective.
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.player, self.cpu)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:<5} {:<8} vs {:<8} {:<4} ({})",
            self.number,
            self.player,
            self.cpu,
            self.outcome(),
            self.strategy
        )
    }
}
