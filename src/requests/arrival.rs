//! Biased coin deciding whether a request arrives at a time step

use super::random::RandomSource;
use crate::simulation::{SimulationError, SimulationResult};

/// Arrival generator with a fixed per-step probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalSource {
    probability: f64,
}

impl ArrivalSource {
    /// Create a source; `probability` must lie in `[0.0, 1.0]`
    pub fn new(probability: f64) -> SimulationResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SimulationError::invalid_parameter(format!(
                "probability must be between 0.0 and 1.0, got {}",
                probability
            )));
        }
        Ok(Self { probability })
    }

    /// Configured arrival probability
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Flip the coin once
    ///
    /// The sample is drawn from `[0.0, 1.0)` and compared strictly, so 0.0 never
    /// fires and 1.0 always does.
    pub fn request_arrived<S: RandomSource>(&self, rng: &mut S) -> bool {
        rng.next_unit() < self.probability
    }
}
