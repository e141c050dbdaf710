//! Arbitration over the predictor roster.
mod arbitrator;

pub use arbitrator::*;
