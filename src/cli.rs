//! Command line configuration and match setup.
use crate::DEFAULT_BOT_ROUNDS;
use crate::ensemble::Arbitrator;
use crate::gameroom::*;
use crate::players::*;
use crate::predictors::*;
use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play Rock-Paper-Scissors against an ensemble of predictors", long_about = None)]
pub struct Args {
    /// Who sits across from the ensemble.
    #[arg(long, value_enum, default_value_t = Versus::Human)]
    pub versus: Versus,
    /// Move script for `--versus pattern`, one letter per move.
    #[arg(long, default_value = "RPS")]
    pub pattern: String,
    /// Stop after this many rounds. Unlimited for humans, 1000 for bots.
    #[arg(long)]
    pub rounds: Option<usize>,
    /// Seed the ensemble for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log every predictor's score each round.
    #[arg(long)]
    pub debug: bool,
    /// Also write a timestamped debug log into this directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// Print the final summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Versus {
    Human,
    Fish,
    Pattern,
    Ensemble,
    Random,
    BeatLast,
    CopyLast,
    LoseToLast,
    MostFrequent,
    AntiRotation,
    FollowUp,
    Weighted,
    WinStay,
}

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        crate::log(self.level(), self.log_dir.as_deref())?;
        let ai = match self.seed {
            Some(seed) => Arbitrator::seeded(seed),
            None => Arbitrator::default(),
        };
        let mut room = Room::new(ai, self.opponent()?);
        let summary = room.run(self.limit())?;
        match self.json {
            true => println!("{}", serde_json::to_string_pretty(&summary)?),
            false => println!("{}", summary),
        }
        Ok(())
    }

    fn level(&self) -> log::LevelFilter {
        match self.debug {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }

    fn limit(&self) -> Option<usize> {
        match self.versus {
            Versus::Human => self.rounds,
            _ => self.rounds.or(Some(DEFAULT_BOT_ROUNDS)),
        }
    }

    fn opponent(&self) -> anyhow::Result<Box<dyn Opponent>> {
        Ok(match self.versus {
            Versus::Human => Box::new(Human),
            Versus::Fish => Box::new(Fish),
            Versus::Pattern => Box::new(
                Pattern::try_from(self.pattern.as_str()).map_err(anyhow::Error::msg)?,
            ),
            Versus::Ensemble => Box::new(Bot::from(Arbitrator::default())),
            Versus::Random => Box::new(Bot::from(Random::default())),
            Versus::BeatLast => Box::new(Bot::from(BeatLastMove::default())),
            Versus::CopyLast => Box::new(Bot::from(CopyLastMove::default())),
            Versus::LoseToLast => Box::new(Bot::from(LoseToLastMove::default())),
            Versus::MostFrequent => Box::new(Bot::from(BeatMostFrequent::default())),
            Versus::AntiRotation => Box::new(Bot::from(AntiRotation::default())),
            Versus::FollowUp => Box::new(Bot::from(BeatSelfFollowUp::default())),
            Versus::Weighted => Box::new(Bot::from(WeightedFrequentist::default())),
            Versus::WinStay => Box::new(Bot::from(AntiWinStayLoseShift::default())),
        })
    }
}
