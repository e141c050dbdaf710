use crate::game::Outcome;
use colored::Colorize;

/// Win/loss/tie counts from the opponent's perspective.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Tally {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins.to_string().green(),
            self.losses.to_string().red(),
            self.ties.to_string().yellow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_outcome() {
        let mut tally = Tally::default();
        [Outcome::Win, Outcome::Loss, Outcome::Loss, Outcome::Tie]
            .into_iter()
            .for_each(|o| tally.add(o));
        assert!(tally == Tally { wins: 1, losses: 2, ties: 1 });
        assert!(tally.rounds() == 4);
    }
}
