//! Rock-Paper-Scissors against an ensemble of move predictors.
//!
//! Nine cheap heuristics each guess the opponent's next move and keep a
//! decaying running score. The [`ensemble::Arbitrator`] plays whichever one
//! currently scores highest, then replays the round counterfactually for
//! every strategy it did not pick so all scores share the same time basis.

pub mod ensemble;
pub mod game;
pub mod gameroom;
pub mod players;
pub mod predictors;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Scores, rewards, and decayed counters.
pub type Utility = f32;
/// Sampling weights.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for cold starts and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PREDICTOR PARAMETERS
// Exponential recency weighting shared by scores and frequency tables.
// ============================================================================
/// Multiplier applied to every running counter before a new observation lands.
/// Lower = forgets faster and chases a player who switches strategy;
/// higher = steadier arbitration that flip-flops less.
pub const DECAY: Utility = 0.92;
/// Number of distinct move symbols.
pub const N_MOVES: usize = 3;
/// Rounds played by automated opponents when no limit is given.
pub const DEFAULT_BOT_ROUNDS: usize = 1000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, plus a timestamped DEBUG log file if a
/// directory is given.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
