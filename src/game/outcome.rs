use super::Move;
use crate::Utility;

/// Result of one move pair, from the perspective of the first move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    /// Win if `a` beats `b`, Tie if equal, Loss otherwise.
    pub fn of(a: Move, b: Move) -> Self {
        match (a == b.beater(), a == b) {
            (true, _) => Outcome::Win,
            (_, true) => Outcome::Tie,
            _ => Outcome::Loss,
        }
    }
    /// The same round seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Tie => Outcome::Tie,
            Outcome::Loss => Outcome::Win,
        }
    }
    /// +1, 0, -1
    pub fn reward(self) -> Utility {
        match self {
            Outcome::Win => 1.,
            Outcome::Tie => 0.,
            Outcome::Loss => -1.,
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((a, b): (Move, Move)) -> Self {
        Self::of(a, b)
    }
}

impl From<Outcome> for i8 {
    fn from(outcome: Outcome) -> i8 {
        match outcome {
            Outcome::Win => 1,
            Outcome::Tie => 0,
            Outcome::Loss => -1,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Outcome::Win => "Win",
            Outcome::Tie => "Tie",
            Outcome::Loss => "Loss",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antisymmetric() {
        for a in Move::all() {
            for b in Move::all() {
                assert!(i8::from(Outcome::of(a, b)) == -i8::from(Outcome::of(b, a)));
                assert!(Outcome::of(a, b) == Outcome::of(b, a).flip());
            }
        }
    }

    #[test]
    fn reflexive_tie() {
        assert!(Move::all().into_iter().all(|m| Outcome::of(m, m) == Outcome::Tie));
    }

    #[test]
    fn cyclic_table() {
        assert!(Outcome::of(Move::Paper, Move::Rock) == Outcome::Win);
        assert!(Outcome::of(Move::Scissors, Move::Paper) == Outcome::Win);
        assert!(Outcome::of(Move::Rock, Move::Scissors) == Outcome::Win);
        assert!(Outcome::of(Move::Rock, Move::Paper) == Outcome::Loss);
        assert!(Outcome::of(Move::Scissors, Move::Rock) == Outcome::Loss);
    }

    #[test]
    fn rewards() {
        assert!(Outcome::Win.reward() == 1.);
        assert!(Outcome::Tie.reward() == 0.);
        assert!(Outcome::Loss.reward() == -1.);
    }
}
