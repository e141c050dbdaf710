use super::*;
use crate::Utility;
use crate::ensemble::Arbitrator;
use crate::predictors::Predictor;

/// End-of-match report.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub opponent: String,
    pub rounds: usize,
    pub tally: Tally,
    pub ensemble: Utility,
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Standing {
    pub name: &'static str,
    pub score: Utility,
}

impl From<(String, &Tally, &Arbitrator)> for Summary {
    fn from((opponent, tally, ai): (String, &Tally, &Arbitrator)) -> Self {
        Self {
            opponent,
            rounds: tally.rounds(),
            tally: *tally,
            ensemble: ai.score().value(),
            standings: ai
                .standings()
                .map(|(name, score)| Standing { name, score })
                .collect(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} rounds against {}", self.rounds, self.opponent)?;
        writeln!(f, "{}", self.tally)?;
        writeln!(f, "{:<40}{:>+8.3}", "Ensemble", self.ensemble)?;
        for Standing { name, score } in self.standings.iter() {
            writeln!(f, "  {:<38}{:>+8.3}", name, score)?;
        }
        Ok(())
    }
}
