use super::*;
use crate::game::Move;
use rand::rngs::SmallRng;

/// Learns what the opponent tends to throw after each of their own moves,
/// then beats the most common follow-up to their latest move.
///
/// An unseen row falls back to its lowest index (Rock) rather than to a
/// random guess; that bias is kept deliberately.
#[derive(Debug)]
pub struct BeatSelfFollowUp {
    score: Score,
    table: Transitions,
    last: Option<Move>,
    rounds: usize,
    rng: SmallRng,
}

impl From<SmallRng> for BeatSelfFollowUp {
    fn from(rng: SmallRng) -> Self {
        Self {
            score: Score::default(),
            table: Transitions::default(),
            last: None,
            rounds: 0,
            rng,
        }
    }
}

impl Default for BeatSelfFollowUp {
    fn default() -> Self {
        Self::from(entropy())
    }
}

impl Predictor for BeatSelfFollowUp {
    fn name(&self) -> &'static str {
        "Beat Most Common Player Self-Follow-Up"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        match (self.rounds, self.last) {
            (0, _) | (_, None) => Move::roll(&mut self.rng),
            (1, Some(last)) => last.beater(),
            (_, Some(last)) => self.table.row(last).mode().beater(),
        }
    }
    fn observe(&mut self, _: Move, opponent: Move) {
        match self.last {
            Some(prior) => self.table.observe(prior, opponent),
            None => self.table.decay(),
        }
        self.last = Some(opponent);
        self.rounds += 1;
    }
}
