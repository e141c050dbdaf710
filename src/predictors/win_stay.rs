use super::*;
use crate::game::Move;
use crate::game::Outcome;
use rand::rngs::SmallRng;

/// Exploits win-stay / lose-shift players.
///
/// After we lose, the opponent won and is expected to stay, so beat their
/// last move. After we win, the opponent lost and is expected to shift to
/// whatever beats our last move, so beat that. Ties carry no signal.
#[derive(Debug)]
pub struct AntiWinStayLoseShift {
    score: Score,
    last: Option<(Move, Move, Outcome)>,
    rng: SmallRng,
}

impl From<SmallRng> for AntiWinStayLoseShift {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            last: None,
            rng,
        }
    }
}

impl Default for AntiWinStayLoseShift {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for AntiWinStayLoseShift {
    fn name(&self) -> &'static str {
        "Anti Win-Stay-Lose-Shift"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match self.last {
            Some((_, opponent, Outcome::Loss)) => opponent.beater(),
            Some((own, _, Outcome::Win)) => own.beater(),
            Some((_, _, Outcome::Tie)) | None => Move::roll(&mut self.rng),
        }
    }
    fn observe(&mut self, own: Move, opponent: Move) {
        self.last = Some((own, opponent, Outcome::of(own, opponent)));
    }
}
