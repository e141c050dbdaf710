use crate::Arbitrary;
use crate::Utility;
use crate::game::Move;
use crate::predictors::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// An AI of AIs.
///
/// Each round the Arbitrator hands the move to whichever predictor holds the
/// strictly highest score, ties going to the earliest in construction order.
/// When the round resolves, that delegate learns from the real move pair and
/// every other predictor is replayed counterfactually: it is asked what it
/// would have thrown and scored against the opponent's actual move. Every
/// predictor therefore records exactly once per round, so scores stay
/// comparable and a benched strategy can earn its way back.
///
/// Selection is transient: `get_move` sets it and the following `record`
/// consumes it.
pub struct Arbitrator {
    score: Score,
    predictors: Vec<Box<dyn Predictor>>,
    selected: Option<usize>,
}

impl From<Vec<Box<dyn Predictor>>> for Arbitrator {
    fn from(predictors: Vec<Box<dyn Predictor>>) -> Self {
        Self {
            score: Score::default(),
            predictors,
            selected: None,
        }
    }
}

/// Full roster with entropy-seeded generators.
impl Default for Arbitrator {
    fn default() -> Self {
        Self::from(Self::roster(entropy))
    }
}

impl Arbitrator {
    /// Full roster, reproducible from a single seed.
    pub fn seeded(seed: u64) -> Self {
        let mut root = SmallRng::seed_from_u64(seed);
        Self::from(Self::roster(|| SmallRng::from_rng(&mut root)))
    }

    /// The nine predictors in arbitration order.
    pub fn roster<F>(mut rng: F) -> Vec<Box<dyn Predictor>>
    where
        F: FnMut() -> SmallRng,
    {
        vec![
            Box::new(Random::from(rng())),
            Box::new(BeatLastMove::from(rng())),
            Box::new(BeatMostFrequent::from(rng())),
            Box::new(AntiWinStayLoseShift::from(rng())),
            Box::new(WeightedFrequentist::from(rng())),
            Box::new(LoseToLastMove::from(rng())),
            Box::new(CopyLastMove::from(rng())),
            Box::new(AntiRotation::from(rng())),
            Box::new(BeatSelfFollowUp::from(rng())),
        ]
    }

    pub fn predictors(&self) -> &[Box<dyn Predictor>] {
        &self.predictors
    }

    /// Delegate chosen by the pending `get_move`, if any.
    pub fn selected(&self) -> Option<&dyn Predictor> {
        self.selected
            .and_then(|i| self.predictors.get(i))
            .map(|p| &**p)
    }

    /// Name and score of every predictor, in arbitration order.
    pub fn standings(&self) -> impl Iterator<Item = (&'static str, Utility)> + '_ {
        self.predictors.iter().map(|p| (p.name(), p.score().value()))
    }

    /// Index of the first predictor with the strictly highest score.
    fn select(&self) -> Option<usize> {
        self.predictors
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, Utility)>, (i, p)| {
                let score = p.score().value();
                match best {
                    Some((_, top)) if score <= top => best,
                    _ => Some((i, score)),
                }
            })
            .map(|(i, _)| i)
    }

    fn report(&self) {
        if log::log_enabled!(log::Level::Debug) {
            self.standings()
                .for_each(|(name, score)| log::debug!("{:<40}{:>+8.3}", name, score));
        }
    }
}

impl Predictor for Arbitrator {
    fn name(&self) -> &'static str {
        "Ensemble"
    }
    fn score(&self) -> &Score {
        &self.score
    }
    fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }
    fn get_move(&mut self) -> Move {
        self.report();
        self.selected = self.select();
        match self.selected {
            Some(i) => {
                log::debug!("strategy: {}", self.predictors[i].name());
                self.predictors[i].get_move()
            }
            None => Move::random(),
        }
    }
    fn observe(&mut self, cpu: Move, player: Move) {
        let selected = self.selected.take();
        if selected.is_none() {
            log::warn!("round recorded without a pending selection");
        }
        for (i, predictor) in self.predictors.iter_mut().enumerate() {
            match Some(i) == selected {
                true => predictor.record(cpu, player),
                false => {
                    let hypothetical = predictor.get_move();
                    predictor.record(hypothetical, player);
                }
            }
        }
    }
}

impl std::fmt::Debug for Arbitrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arbitrator")
            .field("score", &self.score)
            .field("standings", &self.standings().collect::<Vec<_>>())
            .field("selected", &self.selected().map(|p| p.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always throws the same move.
    struct Fixed {
        name: &'static str,
        score: Score,
        throw: Move,
    }

    impl Fixed {
        fn new(name: &'static str, throw: Move, score: Utility) -> Self {
            Self {
                name,
                score: Score::from(score),
                throw,
            }
        }
    }

    impl Predictor for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn score(&self) -> &Score {
            &self.score
        }
        fn score_mut(&mut self) -> &mut Score {
            &mut self.score
        }
        fn get_move(&mut self) -> Move {
            self.throw
        }
        fn observe(&mut self, _: Move, _: Move) {}
    }

    #[test]
    fn delegates_to_highest_score() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("low", Move::Rock, 3.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("high", Move::Scissors, 5.)),
        ]);
        assert!(ai.get_move() == Move::Scissors);
        assert!(ai.selected().map(|p| p.name()) == Some("high"));
    }

    #[test]
    fn ties_go_to_first_constructed() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("first", Move::Rock, 1.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("second", Move::Paper, 1.)),
            Box::new(Fixed::new("third", Move::Scissors, 0.5)),
        ]);
        assert!(ai.get_move() == Move::Rock);
        assert!(ai.selected().map(|p| p.name()) == Some("first"));
    }

    #[test]
    fn negative_scores_still_select() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("worse", Move::Rock, -4.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("bad", Move::Paper, -2.)),
        ]);
        assert!(ai.get_move() == Move::Paper);
    }

    #[test]
    fn repeated_get_move_is_idempotent() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("a", Move::Rock, 0.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("b", Move::Paper, 2.)),
        ]);
        assert!(ai.get_move() == ai.get_move());
        assert!(ai.selected().map(|p| p.name()) == Some("b"));
    }

    #[test]
    fn replays_unselected_predictors_counterfactually() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("rock", Move::Rock, 0.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("paper", Move::Paper, 1.)),
            Box::new(Fixed::new("scissors", Move::Scissors, 0.)),
        ]);
        let cpu = ai.get_move();
        assert!(cpu == Move::Paper);
        ai.record(cpu, Move::Rock);
        assert!(ai.selected().is_none());
        assert!(ai.score().value() == 1.);
        let scores = ai.standings().map(|(_, s)| s).collect::<Vec<_>>();
        // rock ties rock, paper covers rock, scissors lose to rock
        assert!(scores == vec![0., 1. * crate::DECAY + 1., -1.]);
    }

    #[test]
    fn unselected_record_only_replays() {
        let mut ai = Arbitrator::from(vec![
            Box::new(Fixed::new("rock", Move::Rock, 0.)) as Box<dyn Predictor>,
            Box::new(Fixed::new("paper", Move::Paper, 0.)),
        ]);
        ai.record(Move::Scissors, Move::Rock);
        let scores = ai.standings().map(|(_, s)| s).collect::<Vec<_>>();
        assert!(scores == vec![0., 1.]);
    }

    #[test]
    fn empty_roster_still_plays() {
        let mut ai = Arbitrator::from(Vec::new());
        let cpu = ai.get_move();
        assert!(u8::from(cpu) < 3);
        ai.record(cpu, Move::Rock);
        assert!(ai.score().rounds() == 1);
    }

    #[test]
    fn every_predictor_records_every_round() {
        let mut ai = Arbitrator::seeded(42);
        let player = [Move::Rock, Move::Rock, Move::Paper, Move::Scissors, Move::Paper];
        for round in 0..50 {
            let cpu = ai.get_move();
            ai.record(cpu, player[round % player.len()]);
        }
        assert!(ai.score().rounds() == 50);
        assert!(ai.predictors().iter().all(|p| p.score().rounds() == 50));
    }

    #[test]
    fn first_round_settles_every_score() {
        let mut ai = Arbitrator::default();
        assert!(ai.predictors().len() == 9);
        assert!(ai.standings().all(|(_, s)| s == 0.));
        let cpu = ai.get_move();
        assert!(u8::from(cpu) < 3);
        assert!(ai.selected().map(|p| p.name()) == Some("Random"));
        ai.record(cpu, Move::Rock);
        assert!(ai.predictors().iter().all(|p| p.score().rounds() == 1));
        assert!(ai.standings().all(|(_, s)| s == 1. || s == 0. || s == -1.));
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut a = Arbitrator::seeded(9);
        let mut b = Arbitrator::seeded(9);
        for player in Move::all().into_iter().cycle().take(40) {
            let (x, y) = (a.get_move(), b.get_move());
            assert!(x == y);
            a.record(x, player);
            b.record(y, player);
        }
        assert!(a.standings().eq(b.standings()));
    }

    #[test]
    fn recovers_when_opponent_switches() {
        let mut ai = Arbitrator::seeded(1);
        for _ in 0..40 {
            let cpu = ai.get_move();
            ai.record(cpu, Move::Rock);
        }
        for _ in 0..40 {
            let cpu = ai.get_move();
            ai.record(cpu, Move::Scissors);
        }
        // a stale Rock habit must not keep the ensemble throwing Paper
        assert!(ai.get_move() == Move::Rock);
    }
}
