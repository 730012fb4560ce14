//! Injectable randomness
//!
//! Every random draw in a run goes through a [`RandomSource`], so a run is fully
//! determined by its source. [`RngSource`] adapts any `rand` generator and
//! [`ScriptedSource`] replays fixed draws, which is how specific traces are
//! reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Supplier of the two kinds of random draws the simulation needs
pub trait RandomSource {
    /// Uniform sample in `[0.0, 1.0)`
    fn next_unit(&mut self) -> f64;

    /// Uniform floor in `1..=num_floors`; callers guarantee `num_floors >= 1`
    fn next_floor(&mut self, num_floors: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn next_floor(&mut self, num_floors: u32) -> u32 {
        (**self).next_floor(num_floors)
    }
}

/// [`RandomSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, entropy-based otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                debug!(seed, "Using deterministic seed");
                Self::seeded(seed)
            }
            None => {
                debug!("Using entropy-based random seed");
                Self::from_entropy()
            }
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1)
        self.rng.gen::<f64>()
    }

    fn next_floor(&mut self, num_floors: u32) -> u32 {
        self.rng.gen_range(1..=num_floors)
    }
}

/// Largest value strictly below 1.0
const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// [`RandomSource`] that replays fixed sequences of draws, cycling when exhausted
///
/// Replayed floors are clamped into `1..=num_floors`. An empty unit sequence
/// yields `0.0` and an empty floor sequence yields floor 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    units: Vec<f64>,
    floors: Vec<u32>,
    next_unit: usize,
    next_floor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `units` for coin flips and `floors` for floor draws
    pub fn new(units: Vec<f64>, floors: Vec<u32>) -> Self {
        Self { units, floors, next_unit: 0, next_floor: 0 }
    }

    /// Source whose only scripted draws are floors; every coin flip yields `0.0`
    pub fn with_floors(floors: Vec<u32>) -> Self {
        Self::new(Vec::new(), floors)
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.next_unit % self.units.len()];
        self.next_unit += 1;
        value.clamp(0.0, MAX_UNIT)
    }

    fn next_floor(&mut self, num_floors: u32) -> u32 {
        if self.floors.is_empty() {
            return 1;
        }
        let value = self.floors[self.next_floor % self.floors.len()];
        self.next_floor += 1;
        value.clamp(1, num_floors.max(1))
    }
}
