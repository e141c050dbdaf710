use crate::Arbitrary;
use crate::N_MOVES;
use rand::Rng;

/// One of the three throwable shapes.
///
/// The discriminants form a cycle where `v + 1 (mod 3)` beats `v`:
/// Paper covers Rock, Scissors cut Paper, Rock blunts Scissors.
/// Every arithmetic helper stays inside that cycle, so no value
/// outside {0, 1, 2} is ever constructed.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in index order.
    pub const fn all() -> [Move; N_MOVES] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move that beats this one.
    pub fn beater(self) -> Move {
        self.shift(1)
    }
    /// The move this one beats.
    pub fn loser(self) -> Move {
        self.shift(2)
    }
    /// Rotate forward `k` steps around the cycle.
    pub fn shift(self, k: u8) -> Move {
        Move::from(u8::from(self) + k % N_MOVES as u8)
    }
    /// Rotation that takes `prior` to `self`.
    pub fn delta(self, prior: Move) -> u8 {
        (u8::from(self) + N_MOVES as u8 - u8::from(prior)) % N_MOVES as u8
    }
    /// Uniform draw from a caller-owned generator.
    pub fn roll<R: Rng>(rng: &mut R) -> Move {
        Move::from(rng.random_range(0..N_MOVES as u8))
    }
    pub fn initial(&self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        Move::roll(&mut rand::rng())
    }
}

/// u8 isomorphism, reduced mod 3
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n % N_MOVES as u8 {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}
impl From<Move> for usize {
    fn from(m: Move) -> usize {
        m as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(format!("invalid move str: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bijective_u8() {
        assert!(Move::all().into_iter().all(|m| m == Move::from(u8::from(m))));
    }

    #[test]
    fn reduces_mod_three() {
        assert!(Move::from(3) == Move::Rock);
        assert!(Move::from(4) == Move::Paper);
        assert!(Move::from(254) == Move::Scissors);
    }

    #[test]
    fn cyclic_dominance() {
        assert!(Move::Rock.beater() == Move::Paper);
        assert!(Move::Paper.beater() == Move::Scissors);
        assert!(Move::Scissors.beater() == Move::Rock);
        assert!(Move::Rock.loser() == Move::Scissors);
        assert!(Move::all().into_iter().all(|m| m.beater().loser() == m));
    }

    #[test]
    fn exactly_one_of_each_relation() {
        for a in Move::all() {
            let beats = Move::all().into_iter().filter(|b| b.beater() == a).count();
            let loses = Move::all().into_iter().filter(|b| a.beater() == *b).count();
            let ties = Move::all().into_iter().filter(|b| *b == a).count();
            assert!((beats, loses, ties) == (1, 1, 1));
        }
    }

    #[test]
    fn delta_inverts_shift() {
        for a in Move::all() {
            for k in 0..3 {
                assert!(a.shift(k).delta(a) == k);
            }
        }
        assert!(Move::Rock.delta(Move::Scissors) == 1);
        assert!(Move::Scissors.delta(Move::Rock) == 2);
    }

    #[test]
    fn parses_letters_and_names() {
        assert!(Move::try_from("r") == Ok(Move::Rock));
        assert!(Move::try_from(" P ") == Ok(Move::Paper));
        assert!(Move::try_from("Scissors") == Ok(Move::Scissors));
        assert!(Move::try_from("x").is_err());
        assert!(Move::try_from("").is_err());
    }

    #[test]
    fn rolls_cover_every_move() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; N_MOVES];
        (0..256).for_each(|_| seen[usize::from(Move::roll(rng))] = true);
        assert!(seen.iter().all(|&s| s));
    }
}
